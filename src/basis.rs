use image::Rgba;

/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const WHITE: Self = Self::from_hex(0xffffff);

    /// `0xrrggbb` 形式の値から `Color` を作る.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16 & 0xff) as u8,
            g: (hex >> 8 & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// 不透明な `Rgba` ピクセルに変換する.
    pub const fn opaque(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 0xff])
    }

    pub fn matches(self, pixel: &Rgba<u8>) -> bool {
        pixel.0[..3] == [self.r, self.g, self.b]
    }
}

/// `IconKind` は生成するアイコンの種類を表す.
///
/// `Master` はマスター向けアプリ (スパナとチェックマーク), `Client` はクライアント向けアプリ (家とチェックマーク) のアイコン.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Master,
    Client,
}

impl IconKind {
    pub const ALL: [Self; 2] = [Self::Master, Self::Client];

    pub fn name(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Client => "client",
        }
    }

    /// キャンバスの下地の色. 角のピクセルは必ずこの色になる.
    pub fn background(self) -> Color {
        match self {
            Self::Master => Color::from_hex(0x1a1a1a),
            Self::Client => Color::from_hex(0x1a1a2e),
        }
    }
}

impl std::fmt::Display for IconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// `Density` は Android のリソースが使う画面密度の区分を表す.
///
/// 区分ごとのランチャーアイコンの一辺の長さは Android の規約で決まっているので変えてはならない.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// 密度の低い順.
    pub const ALL: [Self; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// アイコンの一辺のピクセル数.
    pub const fn edge(self) -> u32 {
        match self {
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }

    pub fn dir_name(self) -> String {
        format!("mipmap-{}", self.label())
    }
}
