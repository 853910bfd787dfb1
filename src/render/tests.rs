use {
    super::*,
    crate::basis::Density,
    rand::prelude::*,
};

fn at(image: &RgbaImage, x: u32, y: u32) -> Color {
    let p = image.get_pixel(x, y);
    Color {
        r: p.0[0],
        g: p.0[1],
        b: p.0[2],
    }
}

fn contains(image: &RgbaImage, color: Color) -> bool {
    image.pixels().any(|p| color.matches(p))
}

#[test]
fn every_density_is_square_opaque_with_background_corners() {
    for &kind in &IconKind::ALL {
        for &density in &Density::ALL {
            let size = density.edge();
            let image = render(kind, size).unwrap();

            assert_eq!(image.dimensions(), (size, size));
            assert!(image.pixels().all(|p| p.0[3] == 0xff));
            for &(x, y) in &[(0, 0), (size - 1, 0), (0, size - 1), (size - 1, size - 1)] {
                assert_eq!(at(&image, x, y), kind.background(), "{} {:?}", kind, density);
            }
        }
    }
}

#[test]
fn every_density_has_its_palette() {
    for &density in &Density::ALL {
        let master = render(IconKind::Master, density.edge()).unwrap();
        assert!(contains(&master, Color::WHITE));
        assert!(contains(&master, MASTER_CHECK));

        let client = render(IconKind::Client, density.edge()).unwrap();
        assert!(contains(&client, Color::WHITE));
        assert!(contains(&client, WINDOW));
        assert!(contains(&client, CLIENT_CHECK));
    }
}

#[test]
fn deterministic() {
    // fixed rng for stable test results
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..16 {
        let size = rng.gen_range(1..=256);
        for &kind in &IconKind::ALL {
            let a = render(kind, size).unwrap();
            let b = render(kind, size).unwrap();
            assert_eq!(a.dimensions(), (size, size));
            assert_eq!(a.as_raw(), b.as_raw(), "{} at {}", kind, size);
        }
    }
}

#[test]
fn zero_size_is_rejected() {
    assert!(render(IconKind::Master, 0).is_err());
    assert!(render(IconKind::Client, 0).is_err());
}

#[test]
fn master_mdpi() {
    let image = render(IconKind::Master, 48).unwrap();
    let bg = IconKind::Master.background();

    // 頭より上に出ている柄
    assert_eq!(at(&image, 24, 10), Color::WHITE);
    // 頭の輪
    assert_eq!(at(&image, 13, 24), Color::WHITE);
    assert_eq!(at(&image, 34, 24), Color::WHITE);
    // 内側の円は柄ごと抜けている
    assert_eq!(at(&image, 24, 24), bg);
    // チェックマークの二画目の中点
    assert_eq!(at(&image, 27, 22), MASTER_CHECK);
}

#[test]
fn master_xxxhdpi() {
    let image = render(IconKind::Master, 192).unwrap();
    let bg = IconKind::Master.background();

    assert_eq!(at(&image, 96, 40), Color::WHITE);
    assert_eq!(at(&image, 96, 150), Color::WHITE);
    assert_eq!(at(&image, 52, 96), Color::WHITE);
    assert_eq!(at(&image, 96, 96), bg);
    assert_eq!(at(&image, 70, 96), bg);
    assert_eq!(at(&image, 109, 90), MASTER_CHECK);
}

#[test]
fn client_xxxhdpi() {
    let image = render(IconKind::Client, 192).unwrap();
    let bg = IconKind::Client.background();

    // 屋根と壁
    assert_eq!(at(&image, 96, 80), Color::WHITE);
    assert_eq!(at(&image, 45, 160), Color::WHITE);
    // 屋根の外側
    assert_eq!(at(&image, 45, 80), bg);
    // 左右の窓
    assert_eq!(at(&image, 68, 136), WINDOW);
    assert_eq!(at(&image, 130, 130), WINDOW);
    // ドア
    assert_eq!(at(&image, 85, 165), bg);
    // チェックマーク
    assert_eq!(at(&image, 112, 130), CLIENT_CHECK);
}

#[test]
fn client_check_sits_in_lower_half() {
    for &density in &Density::ALL {
        let size = density.edge();
        let image = render(IconKind::Client, size).unwrap();
        let greens = image
            .enumerate_pixels()
            .filter(|(_, _, p)| CLIENT_CHECK.matches(p))
            .map(|(_, y, _)| y)
            .collect::<Vec<_>>();

        assert!(!greens.is_empty());
        assert!(greens.iter().all(|&y| y > size / 2), "{:?}", density);
    }
}

#[test]
fn windows_are_mirrored() {
    let size = 144;
    let image = render(IconKind::Client, size).unwrap();
    let padding = size / 5;
    let house_width = size - padding * 2;
    let window_size = house_width / 5;
    let inset = house_width / 6;
    let window_y = {
        let house_height = house_width / 2;
        let house_y = size / 2 - house_height / 4;
        house_y + house_height / 2 + house_height / 4
    };

    let left = padding + inset;
    let right = padding + house_width - inset - window_size;
    // チェックマークがかからない下端の行で比べる
    let y = window_y + window_size;
    for dx in 0..=window_size {
        assert_eq!(at(&image, left + dx, y), WINDOW);
        assert_eq!(at(&image, right + dx, y), WINDOW);
    }
    assert_eq!(at(&image, left - 1, y), Color::WHITE);
    assert_eq!(at(&image, right + window_size + 1, y), Color::WHITE);
}
