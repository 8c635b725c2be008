//! Page Renderer
//!
//! Assembles the complete replacement document: embedded stylesheet, theme
//! toggle control and the highlighted output block. The page is built as a
//! pure function of (markup, initial theme) so there is never a
//! partially-rendered state to observe.

use std::fmt;

/// Theme state for the rendered page.
///
/// Two states, dark initially, toggling indefinitely between them. The
/// state is an explicit value; the inline script emitted by [`render_page`]
/// is generated from the same class names and glyphs so both sides of the
/// toggle agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// The other theme. Applying this twice returns the original state.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class carried by the page body in this state.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-mode",
            Theme::Light => "light-mode",
        }
    }

    /// Glyph shown on the toggle control in this state.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "\u{1f319}",
            Theme::Light => "\u{2600}\u{fe0f}",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// Dark and light palettes, token category colors and the fixed-position
/// toggle control.
const STYLESHEET: &str = "\
body {
  font-family: monospace;
  margin: 0;
  padding: 0;
}
body.dark-mode {
  background-color: #1e1e1e;
  color: #d4d4d4;
}
body.light-mode {
  background-color: #ffffff;
  color: #000000;
}
#json-output {
  white-space: pre-wrap;
  word-break: break-all;
  margin: 10px;
}
a {
  color: #4fc1ff;
  text-decoration: underline;
}
.json-key { color: #9cdcfe; }
.json-string { color: #ce9178; }
.json-number { color: #b5cea8; }
.json-boolean { color: #569cd6; }
.json-null { color: #569cd6; }
body.light-mode .json-key { color: #800080; }
body.light-mode .json-string { color: #b22222; }
body.light-mode .json-number { color: #008000; }
body.light-mode .json-boolean { color: #0000cd; }
body.light-mode .json-null { color: #0000cd; }
#mode-toggle {
  position: fixed;
  top: 10px;
  right: 10px;
  z-index: 1000;
  padding: 5px 10px;
  font-size: 18px;
  cursor: pointer;
  background: rgba(0, 0, 0, 0.5);
  border: none;
  outline: none;
  border-radius: 8px;
  color: #ffffff;
  transition: background 0.3s;
}
body.light-mode #mode-toggle {
  background: rgba(200, 200, 200, 0.8);
  color: #000000;
}
";

/// Render the complete standalone page around highlighted markup.
///
/// The whole document is produced in one pass and handed back as a single
/// string; writing it out replaces whatever was there before, atomically
/// from the viewer's perspective.
pub fn render_page(markup: &str, theme: Theme) -> String {
    let script = toggle_script();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>JSON</title>\n\
         <style>\n{STYLESHEET}</style>\n\
         </head>\n\
         <body class=\"{body_class}\">\n\
         <button id=\"mode-toggle\" type=\"button\">{glyph}</button>\n\
         <pre id=\"json-output\">{markup}</pre>\n\
         <script>\n{script}</script>\n\
         </body>\n\
         </html>\n",
        body_class = theme.body_class(),
        glyph = theme.glyph(),
    )
}

/// Inline script implementing the toggle transition at view time.
///
/// Class names and glyphs come from [`Theme`] so the emitted state machine
/// cannot drift from the Rust one.
fn toggle_script() -> String {
    format!(
        "(function () {{\n\
         \x20 const toggle = document.getElementById(\"mode-toggle\");\n\
         \x20 toggle.addEventListener(\"click\", () => {{\n\
         \x20   const dark = document.body.classList.contains(\"{dark_class}\");\n\
         \x20   document.body.classList.toggle(\"{dark_class}\", !dark);\n\
         \x20   document.body.classList.toggle(\"{light_class}\", dark);\n\
         \x20   toggle.textContent = dark ? \"{sun}\" : \"{moon}\";\n\
         \x20 }});\n\
         }})();\n",
        dark_class = Theme::Dark.body_class(),
        light_class = Theme::Light.body_class(),
        moon = Theme::Dark.glyph(),
        sun = Theme::Light.glyph(),
    )
}
