//! Test fixtures - reusable shader payloads.

/// A small GLSL vertex shader
pub const FILL_VERT: &str = r#"#version 300 es
layout(location = 0) in vec2 aPos;
void main() { gl_Position = vec4(aPos, 0.0, 1.0); }
"#;

/// A small GLSL fragment shader
pub const FILL_FRAG: &str = r#"#version 300 es
precision highp float;
out vec4 FragColor;
void main() { FragColor = vec4(1.0); }
"#;

/// SPIR-V magic number followed by a version word, little endian
pub const SPIRV_HEADER: &[u8] = &[0x03, 0x02, 0x23, 0x07, 0x00, 0x00, 0x01, 0x00];

/// The fixed header every artifact starts with
pub const ARTIFACT_HEADER: &str = "/*\n * Generated by shaderpack. DO NOT EDIT.\n */\n";
