//! Native image picker

#![cfg_attr(not(feature = "picker"), allow(dead_code))]

/// Dialog filters: one combined entry first, then one per format.
pub(crate) const IMAGE_FILTERS: &[(&str, &[&str])] = &[
    (
        "Image files",
        &["jpg", "jpeg", "png", "bmp", "tga", "gif", "psd", "hdr", "pic", "pnm"],
    ),
    ("JPEG", &["jpg", "jpeg"]),
    ("PNG", &["png"]),
    ("Bitmap", &["bmp"]),
    ("Targa", &["tga"]),
    ("GIF", &["gif"]),
    ("Photoshop", &["psd"]),
    ("HDR", &["hdr"]),
    ("Softimage PIC", &["pic"]),
    ("PNM/PGM/PPM", &["pnm"]),
];

pub(crate) const DIALOG_TITLE: &str = "Select image";

#[cfg(feature = "picker")]
pub(crate) fn pick_image() -> Option<std::path::PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title(DIALOG_TITLE);
    for (name, extensions) in IMAGE_FILTERS {
        dialog = dialog.add_filter(*name, *extensions);
    }
    dialog.pick_file()
}

/// Print the chosen path; a cancelled dialog prints nothing.
#[cfg(feature = "picker")]
pub(crate) fn run_pick_image(mut out: impl std::io::Write) -> anyhow::Result<()> {
    match pick_image() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "image selected");
            writeln!(out, "{}", path.display())?;
        }
        None => tracing::debug!("image dialog cancelled"),
    }
    Ok(())
}
