//! TypeScript module rendering for the generated `games.ts`.

use chrono::{DateTime, SecondsFormat, Utc};

const GENERATED_BANNER: &str = "// Auto-generated file - do not edit manually";
const FALLBACK_BANNER: &str = "// Auto-generated file - fallback for failed generation";

const GAME_DATA_INTERFACE: &str = "\
export interface GameData {
  title: string;
  teamName: string;
  description: string;
  publishedDate: string;
  link: string;
  thumbnailUrl: string;
}";

const DATA_DECL: &str = "export const gamesData: GameData[] = ";
const DEFAULT_EXPORT: &str = ";\n\nexport default gamesData;\n";

/// Which banner the module carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Generated,
    Fallback,
}

impl ArtifactKind {
    fn banner(self) -> &'static str {
        match self {
            ArtifactKind::Generated => GENERATED_BANNER,
            ArtifactKind::Fallback => FALLBACK_BANNER,
        }
    }
}

/// ISO 8601 UTC with milliseconds, e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render the module around an already-serialized JSON array.
pub fn render_module(kind: ArtifactKind, games_json: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "{banner}\n// Generated at: {ts}\n\n{iface}\n\n{DATA_DECL}{games_json}{DEFAULT_EXPORT}",
        banner = kind.banner(),
        ts = format_timestamp(generated_at),
        iface = GAME_DATA_INTERFACE,
    )
}

/// Fallback module: same structure, empty data.
pub fn render_fallback(generated_at: DateTime<Utc>) -> String {
    render_module(ArtifactKind::Fallback, "[]", generated_at)
}
