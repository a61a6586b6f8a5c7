use crate::carrier::{Carrier, set_lsb};
use crate::error::StegoError;
use image::{DynamicImage, RgbImage};

/// 以 RGB8 像素通道为样本的图像载体。
///
/// 样本按行优先、每个像素 R→G→B 的顺序排列，共 `3 * 像素数` 个。
#[derive(Debug, Clone)]
pub struct ImageCarrier {
    image: RgbImage,
}

impl ImageCarrier {
    /// 从已解码的图像构造载体。
    ///
    /// # Errors
    ///
    /// 只接受每像素恰好三个 8 位通道的图像。带透明通道、灰度或
    /// 16 位图像返回 [`StegoError::UnsupportedFormat`]。
    pub fn from_image(image: DynamicImage) -> Result<Self, StegoError> {
        match image {
            DynamicImage::ImageRgb8(image) => Ok(Self { image }),
            other => Err(StegoError::UnsupportedFormat(format!(
                "image must have exactly three 8-bit channels per pixel (RGB8), got {:?}",
                other.color()
            ))),
        }
    }

    /// 从内存中的已编码图像文件 (PNG, BMP 等) 构造载体。
    ///
    /// # Errors
    ///
    /// 无法解码或通道布局不受支持时返回 [`StegoError::UnsupportedFormat`]。
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| StegoError::UnsupportedFormat(e.to_string()))?;
        Self::from_image(image)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl Carrier for ImageCarrier {
    type Output = RgbImage;

    fn sample_count(&self) -> usize {
        self.image.as_raw().len()
    }

    fn read_sample(&self, index: usize) -> u8 {
        self.image.as_raw()[index]
    }

    fn write_sample(&mut self, index: usize, bit: u8) {
        let samples: &mut [u8] = &mut self.image;
        samples[index] = set_lsb(samples[index], bit);
    }

    /// 返回尺寸与颜色模式均未改变的 RGB8 图像，由调用方选择编码格式保存。
    fn finalize(self) -> Result<RgbImage, StegoError> {
        Ok(self.image)
    }
}
