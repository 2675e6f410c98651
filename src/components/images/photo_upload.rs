//! Profile Photo Upload Component
//!
//! Square drop zone that opens the native file dialog. The picked image is
//! center-cropped to a square, downscaled and re-encoded as a PNG
//! `data:` URI, so the wizard state never holds a file path.

use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::prelude::*;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use rfd::FileDialog;

/// Longest side of the stored avatar, in pixels
pub const PHOTO_SIZE: u32 = 512;

/// Decode `bytes`, crop to a centered square and return a PNG data URI.
pub fn encode_profile_photo(bytes: &[u8]) -> anyhow::Result<String> {
    let img = image::load_from_memory(bytes).context("Unrecognized image format")?;
    let square = crop_to_square(img);
    let sized = if square.width() > PHOTO_SIZE {
        square.resize_exact(PHOTO_SIZE, PHOTO_SIZE, FilterType::Lanczos3)
    } else {
        square
    };

    let mut buffer = Vec::new();
    sized
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .context("Failed to encode PNG")?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buffer)))
}

fn load_profile_photo(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    encode_profile_photo(&bytes)
}

/// Largest centered square
fn crop_to_square(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    let side = width.min(height);
    let x = (width - side) / 2;
    let y = (height - side) / 2;
    img.crop_imm(x, y, side, side)
}

#[component]
pub fn PhotoUpload(
    /// Current photo as a data URI
    image: Option<String>,
    /// Receives the new data URI, or `None` when the photo is removed
    on_change: EventHandler<Option<String>>,
) -> Element {
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let pick = move |_| {
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);

        spawn(async move {
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Choose a profile photo")
                    .pick_file()
                    .map(|path| load_profile_photo(&path))
            })
            .await;

            match picked {
                Ok(Some(Ok(data_uri))) => {
                    tracing::info!(bytes = data_uri.len(), "Profile photo loaded");
                    on_change.call(Some(data_uri));
                }
                Ok(Some(Err(e))) => {
                    tracing::warn!("Profile photo rejected: {:#}", e);
                    error.set(Some(format!("{:#}", e)));
                }
                // Dialog cancelled
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("File dialog task failed: {}", e);
                    error.set(Some("Could not open the file dialog".to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "photo-upload",
            button {
                class: if image.is_some() { "photo-drop has-photo" } else { "photo-drop glass-card" },
                onclick: pick,
                disabled: loading(),
                if let Some(src) = image.as_ref() {
                    img { class: "photo-preview", src: "{src}", alt: "Profile" }
                } else if loading() {
                    span { class: "photo-drop-icon spin", "\u{23F3}" }
                    span { class: "photo-drop-hint", "Processing..." }
                } else {
                    span { class: "photo-drop-icon", "\u{2B06}" }
                    span { class: "photo-drop-hint", "Click to upload" }
                }
            }

            if image.is_some() {
                button {
                    class: "photo-remove fade-in",
                    onclick: move |_| on_change.call(None),
                    "Remove photo"
                }
            }

            if let Some(err) = error() {
                p { class: "photo-error", "\u{26A0} {err}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([14, 165, 183]));
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn decode(data_uri: &str) -> DynamicImage {
        let payload = data_uri.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn landscape_is_cropped_to_square() {
        let uri = encode_profile_photo(&png_bytes(40, 20)).unwrap();
        assert_eq!(decode(&uri).dimensions(), (20, 20));
    }

    #[test]
    fn large_photos_are_downscaled() {
        let uri = encode_profile_photo(&png_bytes(600, 900)).unwrap();
        assert_eq!(decode(&uri).dimensions(), (PHOTO_SIZE, PHOTO_SIZE));
    }

    #[test]
    fn garbage_is_rejected_with_context() {
        let err = encode_profile_photo(b"definitely not an image").unwrap_err();
        assert!(format!("{:#}", err).contains("Unrecognized image format"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_profile_photo(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/photo.png"));
    }
}
