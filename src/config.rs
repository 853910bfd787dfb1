use crate::basis::IconKind;

/// 通常のランチャーアイコンのファイル名.
pub const LAUNCHER: &str = "ic_launcher.png";
/// 円形のランチャーアイコンのファイル名.
pub const LAUNCHER_ROUND: &str = "ic_launcher_round.png";

/// 各アプリのリソースディレクトリ. カレントディレクトリからの相対パス.
pub const TARGETS: [(IconKind, &str); 2] = [
    (IconKind::Master, "app/src/main/res"),
    (IconKind::Client, "ClientApp/app/src/main/res"),
];

/// 生成後にやること.
pub const NEXT_STEPS: [&str; 2] = [
    "gradlew assembleDebug",
    "adb install -r app/build/outputs/apk/debug/app-debug.apk",
];
