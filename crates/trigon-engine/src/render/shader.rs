//! Shader sources and compilation diagnostics.
//!
//! All programs share one passthrough vertex stage. Fragment stages come from
//! a single template whose only parameter is the output color, baked in as a
//! WGSL `const`.

use std::fmt;

use anyhow::Result;

use crate::paint::Color;

/// Shared vertex stage.
pub const VERTEX_SOURCE: &str = include_str!("shaders/passthrough.wgsl");

/// Entry point of [`VERTEX_SOURCE`].
pub const VERTEX_ENTRY: &str = "vs_main";

/// Entry point of every fragment stage.
pub const FRAGMENT_ENTRY: &str = "fs_main";

const FRAGMENT_TEMPLATE: &str = include_str!("shaders/solid_color.wgsl");
const COLOR_PLACEHOLDER: &str = "{{COLOR}}";

/// Sources for one program: the shared vertex stage plus a solid-color
/// fragment stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSource {
    pub label: String,
    pub color: Color,
    pub vertex: &'static str,
    pub fragment: String,
}

impl ProgramSource {
    /// Renders the fragment template for `color`.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            vertex: VERTEX_SOURCE,
            fragment: FRAGMENT_TEMPLATE.replace(COLOR_PLACEHOLDER, &color.to_wgsl()),
        }
    }
}

/// Pipeline stage a diagnostic belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One compiler message, detached from wgpu's types.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based source line, when the compiler reported one.
    pub line: Option<u32>,
    pub message: String,
}

impl Diagnostic {
    pub fn from_wgpu(msg: &wgpu::CompilationMessage) -> Self {
        let severity = match msg.message_type {
            wgpu::CompilationMessageType::Error => Severity::Error,
            wgpu::CompilationMessageType::Warning => Severity::Warning,
            wgpu::CompilationMessageType::Info => Severity::Info,
        };

        Self {
            severity,
            line: msg.location.as_ref().map(|loc| loc.line_number),
            message: msg.message.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Logs warnings and fails when any diagnostic is an error.
pub fn check_compilation(label: &str, stage: Stage, diagnostics: &[Diagnostic]) -> Result<()> {
    let mut errors = Vec::new();

    for d in diagnostics {
        match d.severity {
            Severity::Error => errors.push(d.to_string()),
            Severity::Warning => log::warn!("{label} {stage} shader: {d}"),
            Severity::Info => log::debug!("{label} {stage} shader: {d}"),
        }
    }

    if !errors.is_empty() {
        anyhow::bail!(
            "{label}: {stage} shader failed to compile:\n  {}",
            errors.join("\n  ")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(severity: Severity, line: Option<u32>, message: &str) -> Diagnostic {
        Diagnostic { severity, line, message: message.to_string() }
    }

    #[test]
    fn fragment_template_bakes_in_color() {
        let src = ProgramSource::solid("lime", Color::LIME);
        assert!(src.fragment.contains("const COLOR: vec4<f32> = vec4<f32>(0.196, 0.804, 0.196, 1.0);"));
        assert!(!src.fragment.contains(COLOR_PLACEHOLDER));
        assert!(src.fragment.contains(FRAGMENT_ENTRY));
    }

    #[test]
    fn programs_share_vertex_stage() {
        let a = ProgramSource::solid("a", Color::PURPLE);
        let b = ProgramSource::solid("b", Color::BLUE);
        assert_eq!(a.vertex, b.vertex);
        assert_ne!(a.fragment, b.fragment);
        assert!(a.vertex.contains(VERTEX_ENTRY));
        assert!(a.vertex.contains("vec4<f32>(position, 1.0)"));
    }

    #[test]
    fn template_differs_only_in_color() {
        let a = ProgramSource::solid("a", Color::LIME);
        let b = ProgramSource::solid("b", Color::BLUE);
        let a = a.fragment.replace(&Color::LIME.to_wgsl(), "");
        let b = b.fragment.replace(&Color::BLUE.to_wgsl(), "");
        assert_eq!(a, b);
    }

    #[test]
    fn warnings_do_not_fail() {
        let diags = [diag(Severity::Warning, Some(3), "unused"), diag(Severity::Info, None, "note")];
        assert!(check_compilation("lime", Stage::Fragment, &diags).is_ok());
    }

    #[test]
    fn errors_fail_with_line_numbers() {
        let diags = [
            diag(Severity::Error, Some(4), "expected expression"),
            diag(Severity::Warning, None, "unused"),
        ];
        let err = check_compilation("blue", Stage::Fragment, &diags).unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("blue: fragment shader failed to compile"));
        assert!(text.contains("line 4: expected expression"));
        assert!(!text.contains("unused"));
    }
}
