//! Browser and device glue: theme classes, backup files, notification
//! permission. Everything that needs the page goes through `document::eval`.

use dioxus::prelude::*;
use serde::Deserialize;
use store::{ColorTheme, DisplayTheme};

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Toggle the `dark` class and the accent `theme-*` class on `<html>`.
/// `Auto` follows the OS color-scheme preference.
pub fn apply_theme(theme: DisplayTheme, color: ColorTheme) {
    let mode = match theme {
        DisplayTheme::Light => "light",
        DisplayTheme::Dark => "dark",
        DisplayTheme::Auto => "auto",
    };
    let js = format!(
        r#"(function() {{
            var root = document.documentElement;
            var mode = {mode};
            var prefersDark = window.matchMedia && window.matchMedia("(prefers-color-scheme: dark)").matches;
            root.className = root.className.split(" ").filter(function(c) {{
                return c && c.indexOf("theme-") !== 0;
            }}).join(" ");
            root.classList.toggle("dark", mode === "dark" || (mode === "auto" && prefersDark));
            root.classList.add({color});
        }})();"#,
        mode = js_string_escape(mode),
        color = js_string_escape(color.class_name()),
    );
    document::eval(&js);
}

/// Hand a backup document to the user: a download in the browser, a file in
/// the documents directory on device.
#[cfg(target_arch = "wasm32")]
pub fn save_backup(file_name: &str, json: &str) -> std::io::Result<()> {
    let js = format!(
        r#"(function() {{
            var blob = new Blob([{json}], {{ type: "application/json" }});
            var url = URL.createObjectURL(blob);
            var a = document.createElement("a");
            a.href = url;
            a.download = {name};
            document.body.appendChild(a);
            a.click();
            document.body.removeChild(a);
            setTimeout(function() {{ URL.revokeObjectURL(url); }}, 1000);
        }})();"#,
        json = js_string_escape(json),
        name = js_string_escape(file_name),
    );
    document::eval(&js);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_backup(file_name: &str, json: &str) -> std::io::Result<()> {
    let dir = dirs::document_dir()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, json)?;
    tracing::info!("backup written to {}", path.display());
    Ok(())
}

#[derive(Deserialize)]
struct PickedFile {
    name: String,
    mime: String,
    text: String,
}

/// Open a file picker limited to JSON and return the chosen file's text.
///
/// Files that are not JSON by name or MIME type are refused. If the picker is
/// dismissed the future never resolves.
pub async fn pick_backup_file() -> Option<String> {
    let js = format!(
        r#"(function() {{
            var input = document.createElement("input");
            input.type = "file";
            input.accept = {accept};
            input.onchange = function() {{
                var file = input.files && input.files[0];
                if (!file) {{ dioxus.send(null); return; }}
                var reader = new FileReader();
                reader.onload = function() {{
                    dioxus.send({{ name: file.name, mime: file.type, text: String(reader.result) }});
                }};
                reader.onerror = function() {{ dioxus.send(null); }};
                reader.readAsText(file);
            }};
            input.click();
        }})();"#,
        accept = js_string_escape(store::backup::ACCEPT),
    );
    let mut eval = document::eval(&js);
    let picked = eval.recv::<Option<PickedFile>>().await.ok().flatten()?;
    if !store::backup::accepts_upload(&picked.name, &picked.mime) {
        tracing::warn!("ignoring non-JSON restore file {}", picked.name);
        return None;
    }
    Some(picked.text)
}

/// Ask for notification permission. Resolves to whether it was granted.
pub async fn request_notifications() -> bool {
    let js = r#"(function() {
        if (!("Notification" in window)) { dioxus.send(false); return; }
        Notification.requestPermission().then(function(p) { dioxus.send(p === "granted"); });
    })();"#;
    let mut eval = document::eval(js);
    eval.recv::<bool>().await.unwrap_or(false)
}

/// Directory holding `glucojourney.toml` on devices with a filesystem.
pub fn config_dir() -> Option<std::path::PathBuf> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dirs::data_dir().map(|dir| dir.join("glucojourney"))
    }
    #[cfg(target_arch = "wasm32")]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escape() {
        assert_eq!(js_string_escape("plain"), "\"plain\"");
        assert_eq!(js_string_escape("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
        assert_eq!(js_string_escape("\u{1}"), "\"\\u0001\"");
    }
}
