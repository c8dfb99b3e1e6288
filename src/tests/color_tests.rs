//! 颜色单元测试

use crate::Color;

/// 不透明源直接覆盖
#[test]
fn test_blend_opaque_source_replaces() {
    let dst = Color::rgb(10, 20, 30);
    let src = Color::rgb(200, 100, 50);
    assert_eq!(Color::blend(dst, src), src);
}

/// 全透明源保持目标不变
#[test]
fn test_blend_transparent_source_keeps_destination() {
    let dst = Color::new(10, 20, 30, 77);
    let src = Color::new(200, 100, 50, 0);
    assert_eq!(Color::blend(dst, src), dst);
}

/// 半透明白色叠在黑色上
#[test]
fn test_blend_half_alpha() {
    let out = Color::blend(Color::BLACK, Color::WHITE.with_alpha(128));
    assert_eq!(out.r, 128);
    assert_eq!(out.g, 128);
    assert_eq!(out.b, 128);
    assert_eq!(out.a, 255);
}

/// 叠在透明背景上时 alpha 等于源 alpha
#[test]
fn test_blend_over_transparent() {
    let out = Color::blend(Color::TRANSPARENT, Color::RED.with_alpha(100));
    assert_eq!(out.a, 100);
}

#[test]
fn test_lerp_endpoints_and_midpoint() {
    assert_eq!(Color::lerp(Color::BLACK, Color::WHITE, 0.0), Color::BLACK);
    assert_eq!(Color::lerp(Color::BLACK, Color::WHITE, 1.0), Color::WHITE);
    assert_eq!(Color::lerp(Color::BLACK, Color::WHITE, 0.5), Color::rgb(128, 128, 128));
    // 超出范围的 t 被钳制
    assert_eq!(Color::lerp(Color::BLACK, Color::WHITE, 3.0), Color::WHITE);
}

#[test]
fn test_hex_and_packed_formats() {
    let c = Color::from_hex(0x007AFF);
    assert_eq!(c, Color::rgb(0, 122, 255));
    assert_eq!(c.to_u32_xrgb(), 0x007AFF);
    assert_eq!(c.to_u32_rgba(), 0x007AFFFF);
    assert_eq!(Color::from_u32_rgba(0x11223344), Color::new(0x11, 0x22, 0x33, 0x44));
}

#[test]
fn test_float_conversion_clamps() {
    let c = Color::from_f32(2.0, -1.0, 0.5, f32::NAN);
    assert_eq!(c.r, 255);
    assert_eq!(c.g, 0);
    assert_eq!(c.b, 128);
    assert_eq!(c.a, 0);
}

#[test]
fn test_scale_alpha_and_darken() {
    assert_eq!(Color::WHITE.scale_alpha(0.5).a, 128);
    assert_eq!(Color::WHITE.scale_alpha(0.0).a, 0);
    assert_eq!(Color::rgb(100, 200, 50).darken(0.5), Color::rgb(50, 100, 25));
}
