//! End-to-end palette construction through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tones::{
    create_palette, create_tone, record, ColorData, PaletteInput, PaletteOptions, ToneOptions,
    Transform,
};

fn input() -> PaletteInput {
    let mut input = PaletteInput::new();
    input.insert("red".into(), ColorData::new("red", "darkred", "lightred", "extrared"));
    input.insert("blue".into(), ColorData::new("blue", "darkblue", "lightblue", "extrablue"));
    input
}

fn brightness() -> tones::Tone {
    create_tone(
        Transform::new(|d| record! { "foreground" => d.main.as_str() }),
        Some(
            ToneOptions::new()
                .name("brightness")
                .subtone("low", Transform::new(|d| record! { "light" => d.light.as_str() }))
                .subtone("high", Transform::new(|d| record! { "dark" => d.dark.as_str() })),
        ),
    )
}

#[test]
fn builds_documented_example() {
    let mut input = PaletteInput::new();
    input.insert("red".into(), ColorData::new("red", "darkred", "lightred", "extrared"));

    let tone = create_tone(
        Transform::new(|d| record! { "foreground" => d.main.as_str() }),
        Some(
            ToneOptions::new()
                .name("brightness")
                .subtone("low", Transform::new(|d| record! { "white" => d.light.as_str() })),
        ),
    );
    let options = PaletteOptions::new()
        .base("background", Transform::new(|d| record! { "background" => d.main.as_str() }))
        .tone("brightness", tone);

    let palette = create_palette(&input, &options).unwrap();

    assert_eq!(
        palette["red"],
        record! {
            "main" => "red",
            "dark" => "darkred",
            "light" => "lightred",
            "extra" => "extrared",
            "background" => "red",
        }
    );
    assert_eq!(palette["red_brightness"], record! { "foreground" => "red" });
    assert_eq!(palette["red_low_brightness"], record! { "white" => "lightred" });
    assert_eq!(palette.len(), 3);
}

#[test]
fn tones_and_subtones_for_every_colour() {
    let depth = create_tone(
        Transform::new(|d| record! { "color" => d.main.as_str(), "background" => d.light.as_str() }),
        Some(ToneOptions::new().name("depth")),
    );
    let options = PaletteOptions::new()
        .tone("brightness", brightness())
        .tone("depth", depth);

    let palette = create_palette(&input(), &options).unwrap();

    assert_eq!(palette["red_brightness"], record! { "foreground" => "red" });
    assert_eq!(
        palette["blue_depth"],
        record! { "color" => "blue", "background" => "lightblue" }
    );
    assert_eq!(palette["red_low_brightness"], record! { "light" => "lightred" });
    assert_eq!(palette["blue_high_brightness"], record! { "dark" => "darkblue" });
}

#[test]
fn tone_without_subtones_adds_no_subtone_entries() {
    let plain = create_tone(Transform::new(|d| record! { "fg" => d.main.as_str() }), None);
    let palette = create_palette(&input(), &PaletteOptions::new().tone("plain", plain)).unwrap();

    let keys: Vec<&str> = palette.keys().collect();
    assert_eq!(keys, vec!["red", "red_plain", "blue", "blue_plain"]);
}

#[test]
fn combined_base_and_tones() {
    let theme = create_tone(
        Transform::new(|d| record! { "base" => d.main.as_str(), "accent" => d.dark.as_str() }),
        Some(
            ToneOptions::new()
                .name("theme")
                .subtone("light", Transform::new(|d| record! { "background" => d.light.as_str() }))
                .subtone("dark", Transform::new(|d| record! { "background" => d.dark.as_str() })),
        ),
    );
    let options = PaletteOptions::new()
        .base("text", Transform::new(|d| record! { "textColor" => d.main.as_str() }))
        .tone("theme", theme);

    let palette = create_palette(&input(), &options).unwrap();

    assert_eq!(palette["red"]["textColor"], "red");
    assert_eq!(palette["blue"]["textColor"], "blue");
    assert_eq!(palette["red_theme"], record! { "base" => "red", "accent" => "darkred" });
    assert_eq!(palette["blue_light_theme"], record! { "background" => "lightblue" });
    assert!(!palette["red_theme"].contains_key("textColor"));
}

#[test]
fn repeated_builds_are_equal_and_leave_inputs_alone() {
    let input = input();
    let options = PaletteOptions::new()
        .base("bg", Transform::new(|d| record! { "main" => "replaced", "bg" => d.main.as_str() }))
        .tone("brightness", brightness());
    let before = input.clone();

    let first = create_palette(&input, &options).unwrap();
    let second = create_palette(&input, &options).unwrap();

    assert_eq!(first, second);
    assert_eq!(input, before);
    assert_eq!(first["red"]["main"], "replaced");
    assert_eq!(input["red"].main, "red");
}

#[test]
fn callback_error_is_returned_unchanged() {
    #[derive(Debug)]
    struct Unshadeable(String);

    impl std::fmt::Display for Unshadeable {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "cannot shade {}", self.0)
        }
    }

    impl std::error::Error for Unshadeable {}

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let tone = create_tone(
        Transform::try_new(move |d| {
            counter.fetch_add(1, Ordering::SeqCst);
            if d.main == "red" {
                Err(Unshadeable(d.main.clone()).into())
            } else {
                Ok(record! {})
            }
        }),
        None,
    );

    let err = create_palette(&input(), &PaletteOptions::new().tone("shade", tone)).unwrap_err();

    let unshadeable = err.downcast_ref::<Unshadeable>().expect("original error type");
    assert_eq!(unshadeable.0, "red");
    // blue is never reached once red fails
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
