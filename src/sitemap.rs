use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

use crate::i18n::Locale;

const CHANGE_FREQ: &str = "weekly";
const PRIORITY: &str = "1.0";

/// Sitemap listing the home page under every locale prefix, plus the unprefixed root.
pub fn generate(base_url: &str, lastmod: DateTime<Utc>) -> String {
    let base_url = base_url.trim_end_matches('/');
    let lastmod = lastmod.to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut locs = Locale::ALL
        .iter()
        .map(|locale| format!("{base_url}/{}", locale.code()))
        .collect::<Vec<_>>();
    locs.push(base_url.to_string());

    let alternates = Locale::ALL
        .iter()
        .map(|locale| {
            format!(
                r#"    <xhtml:link rel="alternate" hreflang="{code}" href="{base_url}/{code}" />"#,
                code = locale.code()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
        xmlns:xhtml="http://www.w3.org/1999/xhtml">
"#,
    );
    for loc in locs {
        // writing to a String can't fail
        let _ = write!(
            out,
            "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{CHANGE_FREQ}</changefreq>\n    <priority>{PRIORITY}</priority>\n{alternates}\n  </url>\n"
        );
    }
    out.push_str("</urlset>\n");
    out
}
