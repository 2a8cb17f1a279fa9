//! SVG output and the terminal preview.

use std::fmt::Write;

use crate::QrMatrix;

/// SVG renderer. Colours are `0xrrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Svg {
    size: u32,
    light: u32,
    dark: u32,
}

impl Svg {
    /// Black on white, `size` pixels wide and high.
    pub const fn new(size: u32) -> Self {
        Self { size, light: 0xffffff, dark: 0x000000 }
    }

    pub const fn light(mut self, color: u32) -> Self {
        self.light = color & 0xffffff;
        self
    }

    pub const fn dark(mut self, color: u32) -> Self {
        self.dark = color & 0xffffff;
        self
    }

    pub fn render(&self, mat: &QrMatrix) -> String {
        let size = self.size;
        let cell = size as f64 / mat.size() as f64;

        let mut svg = String::new();
        // writing into a String cannot fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
        );
        let _ = write!(svg, r##"<rect width="{size}" height="{size}" fill="#{:06x}"/>"##, self.light);

        for row in 0..mat.size() {
            for col in 0..mat.size() {
                if mat.dark(row, col) {
                    let _ = write!(
                        svg,
                        r##"<rect x="{:.2}" y="{:.2}" width="{cell:.2}" height="{cell:.2}" fill="#{:06x}"/>"##,
                        col as f64 * cell,
                        row as f64 * cell,
                        self.dark,
                    );
                }
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

const ANSI_LIGHT: &str = "\x1b[38;5;255m";
const ANSI_DARK: &str = "\x1b[38;5;232m";
const ANSI_RESET: &str = "\x1b[0m";

/// Two block characters per module with a 4 module quiet zone.
impl core::fmt::Display for QrMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let quiet = "██".repeat(4);
        let quiet_row = "██".repeat(self.size() + 8);

        for _ in 0..4 {
            writeln!(f, "{ANSI_LIGHT}{quiet_row}")?;
        }

        for row in 0..self.size() {
            write!(f, "{ANSI_LIGHT}{quiet}")?;
            for col in 0..self.size() {
                write!(f, "{}██", if self.dark(row, col) { ANSI_DARK } else { ANSI_LIGHT })?;
            }
            writeln!(f, "{ANSI_LIGHT}{quiet}")?;
        }

        for _ in 0..4 {
            writeln!(f, "{ANSI_LIGHT}{quiet_row}")?;
        }

        write!(f, "{ANSI_RESET}")
    }
}

#[cfg(test)]
fn count_dark(mat: &QrMatrix) -> usize {
    (0..mat.size())
        .map(|row| (0..mat.size()).filter(|col| mat.dark(row, *col)).count())
        .sum()
}

#[test]
fn test_svg_shape() {
    let mat = crate::encode(b"svg").unwrap();
    let svg = Svg::new(210).render(&mat);

    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="210" height="210" viewBox="0 0 210 210">"#
    ));
    assert!(svg.contains(r##"<rect width="210" height="210" fill="#ffffff"/>"##));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<rect").count(), count_dark(&mat) + 1);

    // top left finder corner, 10 pixels per module
    assert!(svg.contains(r##"<rect x="0.00" y="0.00" width="10.00" height="10.00" fill="#000000"/>"##));
    assert!(svg.contains(r##"<rect x="60.00" y="60.00" width="10.00" height="10.00" fill="#000000"/>"##));
}

#[test]
fn test_svg_colors() {
    let mat = crate::encode(b"colors").unwrap();
    let svg = Svg::new(200).light(0x123456).dark(0xabcdef).render(&mat);

    assert!(svg.contains(r##"fill="#123456""##));
    assert!(svg.contains(r##"fill="#abcdef""##));
    assert!(!svg.contains(r##"fill="#000000""##));
}

#[test]
fn test_svg_fractional_cells() {
    let mat = crate::encode(b"frac").unwrap();
    let svg = Svg::new(200).render(&mat);

    // 200 / 21
    assert!(svg.contains(r#"width="9.52" height="9.52""#));
}

#[test]
fn test_terminal_preview() {
    let mat = crate::encode(b"print").unwrap();
    let text = mat.to_string();

    // quiet zone rows plus one line per module row
    assert_eq!(text.matches('\n').count(), mat.size() + 8);
    assert!(text.ends_with("\x1b[0m"));
}
