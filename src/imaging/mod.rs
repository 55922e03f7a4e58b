//! # 图片格式转换
//!
//! 解码单张图片并以目标格式写出同名兄弟文件。
//!
//! ## 功能
//! - 根据目标扩展名确定编码格式
//! - JPEG 输出支持质量参数 (1-100)，带透明通道的图片先转为 RGB8
//! - 其他格式忽略质量参数
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `image` crate

use crate::error::{FilekitError, Result};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 由扩展名解析可写出的图片格式
pub fn target_format(ext: &str) -> Result<ImageFormat> {
    ImageFormat::from_extension(ext)
        .filter(|format| format.writing_enabled())
        .ok_or_else(|| {
            FilekitError::UnsupportedFormat(format!("Cannot encode images as '.{}'", ext))
        })
}

/// 输出路径：替换源文件的最后一个扩展名
pub fn output_path(input_path: &Path, target_ext: &str) -> PathBuf {
    input_path.with_extension(target_ext)
}

/// 转换单张图片，返回输出文件路径
pub fn convert_image(
    input_path: &Path,
    target_ext: &str,
    format: ImageFormat,
    quality: u8,
) -> Result<PathBuf> {
    let img = ImageReader::open(input_path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| FilekitError::FileReadError {
            path: input_path.display().to_string(),
            source: e,
        })?
        .decode()
        .map_err(|e| FilekitError::ImageError {
            path: input_path.display().to_string(),
            source: e,
        })?;

    let output = output_path(input_path, target_ext);
    if output == input_path {
        return Err(FilekitError::InvalidArgument(format!(
            "Refusing to overwrite source image {}",
            input_path.display()
        )));
    }

    let written = match format {
        ImageFormat::Jpeg => write_jpeg(&img, &output, quality),
        _ => img
            .save_with_format(&output, format)
            .map_err(|e| FilekitError::ImageError {
                path: output.display().to_string(),
                source: e,
            }),
    };

    if let Err(e) = written {
        // 不留下写了一半的输出
        let _ = fs::remove_file(&output);
        return Err(e);
    }

    Ok(output)
}

fn write_jpeg(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let file = File::create(output).map_err(|e| FilekitError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    let result = match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img.write_with_encoder(encoder),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder),
    };
    result.map_err(|e| FilekitError::ImageError {
        path: output.display().to_string(),
        source: e,
    })?;

    writer.flush().map_err(|e| FilekitError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 128]))
    }

    #[test]
    fn test_target_format() {
        assert_eq!(target_format("jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(target_format("JPEG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(target_format("png").unwrap(), ImageFormat::Png);
        assert!(matches!(
            target_format("docx"),
            Err(FilekitError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_output_path_is_sibling() {
        assert_eq!(
            output_path(Path::new("/data/shot.v1.png"), "jpg"),
            PathBuf::from("/data/shot.v1.jpg")
        );
    }

    #[test]
    fn test_png_to_jpg_keeps_source() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tile.png");
        gradient(8, 6).save(&input).unwrap();
        let before = std::fs::read(&input).unwrap();

        let output = convert_image(&input, "jpg", ImageFormat::Jpeg, 85).unwrap();

        assert_eq!(output, dir.path().join("tile.jpg"));
        let decoded = image::open(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
        assert_eq!(std::fs::read(&input).unwrap(), before);
    }

    #[test]
    fn test_rgba_source_flattens_for_jpeg() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("alpha.png");
        RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 100]))
            .save(&input)
            .unwrap();

        let output = convert_image(&input, "jpg", ImageFormat::Jpeg, 50).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_png_to_bmp_ignores_quality() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tile.png");
        gradient(3, 3).save(&input).unwrap();

        let output = convert_image(&input, "bmp", ImageFormat::Bmp, 1).unwrap();
        let decoded = image::open(&output).unwrap().to_rgb8();
        assert_eq!(decoded, gradient(3, 3));
    }

    #[test]
    fn test_same_extension_never_overwrites_source() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("photo.jpg");
        image::DynamicImage::ImageRgb8(gradient(16, 16))
            .save_with_format(&input, ImageFormat::Jpeg)
            .unwrap();
        let before = std::fs::read(&input).unwrap();

        let err = convert_image(&input, "jpg", ImageFormat::Jpeg, 10).unwrap_err();
        assert!(matches!(err, FilekitError::InvalidArgument(_)));
        assert_eq!(std::fs::read(&input).unwrap(), before);
    }

    #[test]
    fn test_failed_encode_leaves_no_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("wide.png");
        // JPEG 宽度上限为 65535
        RgbImage::new(70_000, 1).save(&input).unwrap();

        let err = convert_image(&input, "jpg", ImageFormat::Jpeg, 85).unwrap_err();
        assert!(matches!(err, FilekitError::ImageError { .. }));
        assert!(!dir.path().join("wide.jpg").exists());
    }

    #[test]
    fn test_corrupt_source_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"not an image").unwrap();

        let err = convert_image(&input, "jpg", ImageFormat::Jpeg, 85).unwrap_err();
        assert!(matches!(err, FilekitError::ImageError { .. }));
        assert!(!dir.path().join("broken.jpg").exists());
    }
}
