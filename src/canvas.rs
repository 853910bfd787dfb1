use {
    crate::basis::Color,
    image::{Rgba, RgbaImage},
};

/// `Point` はキャンバス上のピクセル座標を表す. ピクセル `(x, y)` の中心は `(x + 0.5, y + 0.5)` にある.
pub type Point = (i32, i32);

/// `Canvas` は不透明な下地を持つ正方形の RGBA 画像と, その上に図形を塗る操作を提供する.
///
/// 図形はすべてアンチエイリアスなしで上書きされる. あるピクセルを塗るかどうかはピクセル中心が図形に含まれるかで決める.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, background.opaque()),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// `[x0, y0, x1, y1]` の両端を含む矩形を塗る.
    pub fn rectangle(&mut self, [x0, y0, x1, y1]: [i32; 4], color: Color) {
        self.fill_where(x0, y0, x1, y1, color, |_, _| true);
    }

    /// 矩形 `[x0, y0, x1, y1]` (両端を含む) に内接する楕円を塗る.
    pub fn ellipse(&mut self, [x0, y0, x1, y1]: [i32; 4], color: Color) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        let cx = (x0 + x1 + 1) as f64 / 2.0;
        let cy = (y0 + y1 + 1) as f64 / 2.0;
        let rx = (x1 - x0 + 1) as f64 / 2.0;
        let ry = (y1 - y0 + 1) as f64 / 2.0;

        self.fill_where(x0, y0, x1, y1, color, |px, py| {
            let dx = (px - cx) / rx;
            let dy = (py - cy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    /// 各頂点のピクセル中心を結んだ凸多角形を塗る. 頂点の順序は時計回りでも反時計回りでもよい.
    pub fn polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let centers = points.iter().map(|&p| center(p)).collect::<Vec<_>>();

        let (x0, x1) = min_max(points.iter().map(|p| p.0));
        let (y0, y1) = min_max(points.iter().map(|p| p.1));

        self.fill_where(x0, y0, x1, y1, color, |px, py| {
            let mut has_neg = false;
            let mut has_pos = false;
            for (i, &(ax, ay)) in centers.iter().enumerate() {
                let (bx, by) = centers[(i + 1) % centers.len()];
                let c = cross(bx - ax, by - ay, px - ax, py - ay);
                has_neg |= c < 0.0;
                has_pos |= c > 0.0;
            }
            !(has_neg && has_pos)
        });
    }

    /// `from` から `to` へ太さ `width` の線分を引く. 両端は丸めずに線分と垂直に切り落とす.
    pub fn line(&mut self, from: Point, to: Point, width: u32, color: Color) {
        let half = width.max(1) as f64 / 2.0;
        let (ax, ay) = center(from);
        let (bx, by) = center(to);
        let (dx, dy) = (bx - ax, by - ay);
        let len2 = dx * dx + dy * dy;

        let reach = half.ceil() as i32;
        let (x0, x1) = min_max([from.0, to.0].iter().copied());
        let (y0, y1) = min_max([from.1, to.1].iter().copied());

        self.fill_where(
            x0 - reach,
            y0 - reach,
            x1 + reach,
            y1 + reach,
            color,
            |px, py| {
                let (vx, vy) = (px - ax, py - ay);
                if len2 == 0.0 {
                    return vx.abs() <= half && vy.abs() <= half;
                }
                let t = (vx * dx + vy * dy) / len2;
                (0.0..=1.0).contains(&t) && cross(dx, dy, vx, vy).abs() <= half * len2.sqrt()
            },
        );
    }

    /// キャンバスに収まる範囲で `[x0, y0, x1, y1]` 内のピクセルのうち `inside` を満たすものを塗る.
    fn fill_where(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
        inside: impl Fn(f64, f64) -> bool,
    ) {
        let last = self.size() as i64 - 1;
        let clamp = |v: i32| (v as i64).max(0).min(last);
        if last < 0 || (x1 as i64) < 0 || (y1 as i64) < 0 || x0 as i64 > last || y0 as i64 > last {
            return;
        }

        let pixel: Rgba<u8> = color.opaque();
        for y in clamp(y0)..=clamp(y1) {
            for x in clamp(x0)..=clamp(x1) {
                if inside(x as f64 + 0.5, y as f64 + 0.5) {
                    self.image.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }
}

#[inline]
fn center((x, y): Point) -> (f64, f64) {
    (x as f64 + 0.5, y as f64 + 0.5)
}

#[inline]
fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

fn min_max(values: impl Iterator<Item = i32>) -> (i32, i32) {
    values.fold((i32::MAX, i32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
