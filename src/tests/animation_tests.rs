//! 补间动画单元测试

use crate::animation::{Easing, Tween};

#[test]
fn test_easing_curves() {
    assert_eq!(Easing::default(), Easing::Linear);
    assert_eq!(Easing::Linear.apply(0.25), 0.25);
    assert_eq!(Easing::EaseOutCubic.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOutCubic.apply(0.5), 0.875);
    assert_eq!(Easing::EaseOutCubic.apply(1.0), 1.0);
    // 输入钳制到 [0, 1]
    assert_eq!(Easing::EaseOutCubic.apply(2.0), 1.0);
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
}

/// 缓出三次：半程 0.875，结束时正好是终值并保持
#[test]
fn test_ease_out_tween_reaches_target() {
    let mut tween = Tween::new(1.0, Easing::EaseOutCubic);
    tween.start(0.0, 1.0);
    assert!(tween.is_active());

    assert_eq!(tween.update(0.5), 0.875);
    assert!(tween.is_active());

    assert_eq!(tween.update(0.5), 1.0);
    assert!(!tween.is_active());

    assert_eq!(tween.update(1.0), 1.0);
    assert_eq!(tween.value(), 1.0);
}

#[test]
fn test_linear_tween_between_values() {
    let mut tween = Tween::new(2.0, Easing::Linear);
    tween.start(10.0, 20.0);

    assert_eq!(tween.update(1.0), 15.0);
    assert_eq!(tween.progress(), 0.5);
    // 超过时长只会停在终值
    assert_eq!(tween.update(5.0), 20.0);
    assert_eq!(tween.progress(), 1.0);
}

/// 未启动的补间返回终值（默认 0）
#[test]
fn test_idle_tween_returns_target() {
    let mut tween = Tween::new(1.0, Easing::Linear);
    assert!(!tween.is_active());
    assert_eq!(tween.value(), 0.0);
    assert_eq!(tween.update(0.3), 0.0);
}

#[test]
fn test_restart_resets_progress() {
    let mut tween = Tween::new(1.0, Easing::Linear);
    tween.start(0.0, 1.0);
    tween.update(0.8);
    tween.start(1.0, 0.0);

    assert_eq!(tween.value(), 1.0);
    assert_eq!(tween.update(0.25), 0.75);
}

/// 负 dt 不会让时间倒退
#[test]
fn test_negative_dt_is_ignored() {
    let mut tween = Tween::new(1.0, Easing::Linear);
    tween.start(0.0, 1.0);
    tween.update(0.5);
    assert_eq!(tween.update(-1.0), 0.5);
}

#[test]
fn test_zero_duration_finishes_immediately() {
    let mut tween = Tween::new(0.0, Easing::EaseOutCubic);
    tween.start(3.0, 7.0);
    assert_eq!(tween.update(0.0), 7.0);
    assert!(!tween.is_active());
}

#[test]
fn test_stop_and_set() {
    let mut tween = Tween::new(1.0, Easing::Linear);
    tween.start(0.0, 4.0);
    tween.update(0.1);
    tween.stop();
    assert!(!tween.is_active());
    assert_eq!(tween.value(), 4.0);

    tween.set(2.5);
    assert_eq!(tween.value(), 2.5);
    assert_eq!(tween.update(1.0), 2.5);
}

/// 循环动画只在空闲时重启
#[test]
fn test_restart_if_idle() {
    let mut tween = Tween::new(1.0, Easing::Linear);
    assert!(tween.restart_if_idle(0.0, 1.0));
    assert!(!tween.restart_if_idle(0.0, 1.0));

    tween.update(1.0);
    assert!(tween.restart_if_idle(0.0, 1.0));
    assert_eq!(tween.value(), 0.0);
}
