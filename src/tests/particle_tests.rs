//! 粒子与效果单元测试

use crate::effects;
use crate::particles::ParticleSystem;
use crate::{Canvas, Color, Rect};

/// 每帧最多补一个，数量不超过容量
#[test]
fn test_spawn_rate_and_capacity() {
    let mut system = ParticleSystem::new(Rect::new(0.0, 0.0, 1280.0, 720.0), 5, 7);
    assert!(system.is_empty());

    system.update(0.0);
    assert_eq!(system.len(), 1);
    system.update(0.0);
    assert_eq!(system.len(), 2);

    for _ in 0..20 {
        system.update(0.0);
    }
    assert_eq!(system.len(), 5);
    assert_eq!(system.capacity(), 5);
}

/// 存活的粒子都在范围内，寿命为正
#[test]
fn test_particles_stay_in_bounds() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
    let mut system = ParticleSystem::new(bounds, 30, 42);
    for _ in 0..300 {
        system.update(1.0 / 30.0);
        for p in system.particles() {
            assert!(bounds.contains(&p.position));
            assert!(p.life > 0.0 && p.life <= p.max_life);
            assert!(p.size >= 1.0 && p.size < 4.0);
        }
    }
}

/// 相同种子得到相同结果
#[test]
fn test_seeded_systems_match() {
    let bounds = Rect::new(0.0, 0.0, 640.0, 360.0);
    let mut a = ParticleSystem::new(bounds, 10, 1234);
    let mut b = ParticleSystem::new(bounds, 10, 1234);
    for _ in 0..50 {
        a.update(0.05);
        b.update(0.05);
    }
    let pa: Vec<_> = a.particles().iter().map(|p| (p.position, p.life)).collect();
    let pb: Vec<_> = b.particles().iter().map(|p| (p.position, p.life)).collect();
    assert_eq!(pa, pb);
}

/// 寿命耗尽的粒子被移除
#[test]
fn test_particles_expire() {
    let mut system = ParticleSystem::new(Rect::new(0.0, 0.0, 100.0, 100.0), 1, 9);
    system.update(0.0);
    let first = system.particles()[0].position;
    // 寿命上限 8 秒
    system.update(9.0);
    assert_eq!(system.len(), 1);
    assert_ne!(system.particles()[0].position, first);
}

#[test]
fn test_render_draws_translucent_pixels() {
    let mut system = ParticleSystem::new(Rect::new(0.0, 0.0, 64.0, 64.0), 3, 5);
    for _ in 0..3 {
        system.update(0.0);
    }
    let mut canvas = Canvas::new(64, 64);
    canvas.clear(Color::BLACK);
    system.render(&mut canvas);
    assert!(canvas.pixels().iter().any(|p| *p != Color::BLACK));
}

/// 阴影画在矩形右下方
#[test]
fn test_shadow_offsets() {
    let mut canvas = Canvas::new(40, 40);
    canvas.clear(Color::WHITE);
    effects::draw_shadow(&mut canvas, &Rect::new(10.0, 10.0, 10.0, 10.0), 0.0, effects::SHADOW_LAYERS, 0.3);

    assert_ne!(canvas.get_pixel(21, 21), Color::WHITE);
    assert_eq!(canvas.get_pixel(5, 5), Color::WHITE);
}

/// 发光向外扩散
#[test]
fn test_glow_spreads_outward() {
    let mut canvas = Canvas::new(40, 40);
    canvas.clear(Color::BLACK);
    effects::draw_glow(&mut canvas, &Rect::new(15.0, 15.0, 10.0, 10.0), 0.0, Color::WHITE, 0.5);

    assert_ne!(canvas.get_pixel(12, 20), Color::BLACK);
    assert_eq!(canvas.get_pixel(2, 2), Color::BLACK);
}

/// 透明度为零的效果不改变画布
#[test]
fn test_zero_intensity_effects() {
    let mut canvas = Canvas::new(20, 20);
    canvas.clear(Color::BLACK);
    let before = canvas.pixels().to_vec();
    effects::draw_glow(&mut canvas, &Rect::new(5.0, 5.0, 5.0, 5.0), 2.0, Color::WHITE, 0.0);
    effects::draw_shadow(&mut canvas, &Rect::new(5.0, 5.0, 5.0, 5.0), 2.0, 4, 0.0);
    assert_eq!(canvas.pixels(), before.as_slice());
}

/// 淡入从 80% 尺寸开始，进度为 0 时不绘制
#[test]
fn test_fade_in_scales_up() {
    let rect = Rect::new(0.0, 0.0, 50.0, 50.0);

    let mut hidden = Canvas::new(50, 50);
    hidden.clear(Color::BLACK);
    effects::draw_fade_in(&mut hidden, &rect, 0.0, 0.0, Color::WHITE);
    assert!(hidden.pixels().iter().all(|p| *p == Color::BLACK));

    let mut partial = Canvas::new(50, 50);
    partial.clear(Color::BLACK);
    effects::draw_fade_in(&mut partial, &rect, 0.0, 0.5, Color::WHITE);
    assert_eq!(partial.get_pixel(1, 1), Color::BLACK);
    assert_ne!(partial.get_pixel(25, 25), Color::BLACK);

    let mut full = Canvas::new(50, 50);
    full.clear(Color::BLACK);
    effects::draw_fade_in(&mut full, &rect, 0.0, 1.0, Color::WHITE);
    assert_eq!(full.get_pixel(1, 1), Color::WHITE);
}

/// 脉冲半径在 ±20% 之间起伏
#[test]
fn test_pulse_radius() {
    let mut grown = Canvas::new(40, 40);
    grown.clear(Color::BLACK);
    effects::draw_pulse(&mut grown, 20.0, 20.0, 10.0, 0.25, Color::WHITE);
    assert_eq!(grown.get_pixel(31, 20), Color::WHITE);

    let mut shrunk = Canvas::new(40, 40);
    shrunk.clear(Color::BLACK);
    effects::draw_pulse(&mut shrunk, 20.0, 20.0, 10.0, 0.75, Color::WHITE);
    assert_eq!(shrunk.get_pixel(29, 20), Color::BLACK);
    assert_eq!(shrunk.get_pixel(27, 20), Color::WHITE);
}
