use {
    crate::{
        basis::{Density, IconKind},
        config::{LAUNCHER, LAUNCHER_ROUND},
        mask, render,
    },
    anyhow::{Context as _, Result},
    image::{ImageFormat, RgbaImage},
    log::{debug, info},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// `GeneratedSet` はあるアプリについて書き出したアイコンファイルの一覧を表す.
#[derive(Debug)]
pub struct GeneratedSet {
    pub kind: IconKind,
    pub files: Vec<PathBuf>,
}

/// `base` 以下の `mipmap-*` ディレクトリに全密度分の `kind` のアイコンを書き出す.
///
/// 密度ごとに通常版と円形版の 2 ファイルを書く. 途中で失敗したらそこで止まり, 書き出し済みのファイルは残る.
pub fn generate_icons(kind: IconKind, base: impl AsRef<Path>) -> Result<GeneratedSet> {
    let base = base.as_ref();
    info!("generating {} icons into {}", kind, base.display());

    let mut files = Vec::with_capacity(Density::ALL.len() * 2);
    for &density in &Density::ALL {
        let dir = base.join(density.dir_name());
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let size = density.edge();
        let icon = render::render(kind, size)?;
        files.push(save(&icon, dir.join(LAUNCHER))?);

        let round = mask::round(&icon)?;
        files.push(save(&round, dir.join(LAUNCHER_ROUND))?);

        info!("  {}: {}x{} px", density.label(), size, size);
    }

    info!("{} icons done", kind);
    Ok(GeneratedSet { kind, files })
}

fn save(image: &RgbaImage, path: PathBuf) -> Result<PathBuf> {
    image
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {}", path.display());
    Ok(path)
}
