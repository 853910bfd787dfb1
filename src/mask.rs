use {
    anyhow::{ensure, Result},
    image::{GrayImage, Luma, Rgba, RgbaImage},
};

/// 一辺 `size` の正方形に内接する円の内側を 255, 外側を 0 にしたマスクを作る.
///
/// ピクセル中心と画像中心の距離が `size / 2` 以下なら円の内側とみなす.
pub fn circle_mask(size: u32) -> GrayImage {
    let c = size as f64 / 2.0;
    GrayImage::from_fn(size, size, |x, y| {
        let dx = x as f64 + 0.5 - c;
        let dy = y as f64 + 0.5 - c;
        Luma([if dx * dx + dy * dy <= c * c { 0xff } else { 0 }])
    })
}

/// `image` の色はそのままに, アルファを `mask` の値で置き換えた新しい画像を返す.
pub fn apply_mask(image: &RgbaImage, mask: &GrayImage) -> Result<RgbaImage> {
    ensure!(
        image.dimensions() == mask.dimensions(),
        "mask is {:?} but image is {:?}",
        mask.dimensions(),
        image.dimensions()
    );

    Ok(RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, _]) = *image.get_pixel(x, y);
        let Luma([alpha]) = *mask.get_pixel(x, y);
        Rgba([r, g, b, alpha])
    }))
}

/// 正方形のアイコンから円形に切り抜いた版を作る.
pub fn round(image: &RgbaImage) -> Result<RgbaImage> {
    ensure!(
        image.width() == image.height(),
        "round icon needs a square source, got {}x{}",
        image.width(),
        image.height()
    );
    apply_mask(image, &circle_mask(image.width()))
}
