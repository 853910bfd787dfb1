use {
    crate::{
        basis::{Color, IconKind},
        canvas::Canvas,
    },
    anyhow::{ensure, Context as _, Result},
    image::RgbaImage,
    std::convert::TryFrom,
};

#[cfg(test)]
mod tests;

const MASTER_CHECK: Color = Color::from_hex(0x00e676);
const CLIENT_CHECK: Color = Color::from_hex(0x00c853);
const WINDOW: Color = Color::from_hex(0x2196f3);

/// 一辺 `size` ピクセルの `kind` のアイコンを描く.
///
/// 座標はすべて `size` の整数除算で決まるので, 同じ引数からは常に同じ画像ができる.
pub fn render(kind: IconKind, size: u32) -> Result<RgbaImage> {
    ensure!(size > 0, "icon size must be positive");
    let edge = i32::try_from(size).with_context(|| format!("icon size {} is too large", size))?;

    let mut canvas = Canvas::new(size, kind.background());
    match kind {
        IconKind::Master => draw_master(&mut canvas, edge),
        IconKind::Client => draw_client(&mut canvas, edge),
    }
    Ok(canvas.into_image())
}

/// スパナの柄と頭, その上に重ねたチェックマーク.
fn draw_master(canvas: &mut Canvas, size: i32) {
    let bg = IconKind::Master.background();
    let center = size / 2;
    let padding = size / 6;

    // 柄
    let wrench_width = size / 8;
    canvas.rectangle(
        [
            center - wrench_width / 2,
            padding,
            center + wrench_width / 2,
            size - padding,
        ],
        Color::WHITE,
    );

    // 頭. 内側の円を下地の色で抜いて輪にする (柄もここで抜ける)
    let head_radius = size / 4;
    canvas.ellipse(square_around(center, center, head_radius), Color::WHITE);
    let inner_radius = head_radius - size / 16;
    canvas.ellipse(square_around(center, center, inner_radius), bg);

    let check_size = size / 5;
    let check_x = center - check_size / 3;
    let check_y = center - check_size / 4;
    let knee = (check_x + check_size / 3, check_y + check_size / 2);
    let width = (size / 20) as u32;
    canvas.line((check_x, check_y), knee, width, MASTER_CHECK);
    canvas.line(
        knee,
        (check_x + check_size, check_y - check_size / 3),
        width,
        MASTER_CHECK,
    );
}

/// 屋根と壁, ドアと二つの窓, 下寄りのチェックマーク.
fn draw_client(canvas: &mut Canvas, size: i32) {
    let bg = IconKind::Client.background();
    let center = size / 2;
    let padding = size / 5;

    let house_width = size - padding * 2;
    let house_height = house_width / 2;
    let house_x = padding;
    let house_y = center - house_height / 4;

    let eaves = house_y + house_height / 2;
    canvas.polygon(
        &[
            (house_x, eaves),
            (center, house_y - house_height / 2),
            (house_x + house_width, eaves),
        ],
        Color::WHITE,
    );

    let wall_y = eaves;
    let wall_height = house_height;
    canvas.rectangle(
        [house_x, wall_y, house_x + house_width, wall_y + wall_height],
        Color::WHITE,
    );

    let door_width = house_width / 3;
    let door_height = wall_height / 2;
    let door_x = center - door_width / 2;
    let door_y = wall_y + wall_height - door_height;
    canvas.rectangle(
        [door_x, door_y, door_x + door_width, door_y + door_height],
        bg,
    );

    let window_size = house_width / 5;
    let window_y = wall_y + wall_height / 4;
    let inset = house_width / 6;
    for &window_x in &[house_x + inset, house_x + house_width - inset - window_size] {
        canvas.rectangle(
            [window_x, window_y, window_x + window_size, window_y + window_size],
            WINDOW,
        );
    }

    let check_size = size / 4;
    let check_x = center - check_size / 3;
    let check_y = size - padding - check_size;
    let knee = (check_x + check_size / 3, check_y + check_size);
    let width = (size / 15) as u32;
    canvas.line(
        (check_x, check_y + check_size / 2),
        knee,
        width,
        CLIENT_CHECK,
    );
    canvas.line(knee, (check_x + check_size, check_y), width, CLIENT_CHECK);
}

fn square_around(cx: i32, cy: i32, radius: i32) -> [i32; 4] {
    [cx - radius, cy - radius, cx + radius, cy + radius]
}
