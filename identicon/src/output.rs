//! PNG output for rendered identicons.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::Style;
use crate::error::IdenticonError;
use crate::name::format_image_name;
use crate::pipeline::Identicon;
use crate::render::Canvas;

/// Write a canvas as an 8-bit RGB PNG.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), IdenticonError> {
    let io_err = |source| IdenticonError::Io {
        path: path.to_path_buf(),
        source,
    };
    let encode_err = |source| IdenticonError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, canvas.size, canvas.size);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer
        .write_image_data(&canvas.to_rgb())
        .map_err(encode_err)?;
    writer.finish().map_err(encode_err)?;

    Ok(())
}

/// Path an identicon for `input` is saved to inside `dir`.
pub fn image_path(input: &str, dir: &Path, style: &Style) -> PathBuf {
    dir.join(format!("{}.png", format_image_name(input, style.separator)))
}

/// Render `identicon` and save it as `<dir>/<name>.png`, creating `dir` if needed.
pub fn save(identicon: &Identicon, dir: &Path, style: &Style) -> Result<PathBuf, IdenticonError> {
    std::fs::create_dir_all(dir).map_err(|source| IdenticonError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = image_path(identicon.input(), dir, style);
    let canvas = identicon.render(style);
    write_png(&canvas, &path)?;

    tracing::info!(path = %path.display(), squares = identicon.squares().len(), "wrote identicon");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_uses_normalized_name() {
        let style = Style::default().with_separator('-');
        let path = image_path("Jane Doe", Path::new("out"), &style);
        assert_eq!(path, Path::new("out").join("jane-doe.png"));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        let canvas = Canvas::new(4, Style::default().background);

        let err = write_png(&canvas, &path).unwrap_err();
        assert!(matches!(err, IdenticonError::Io { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("icons");
        let identicon = Identicon::new("Hello World");

        let path = save(&identicon, &out, &Style::default()).unwrap();
        assert_eq!(path, out.join("hello_world.png"));
        assert!(path.is_file());
    }
}
