//! 补间动画
//!
//! 两态状态机：空闲（返回最后的终值）和运行（`elapsed` 单调递增）。
//! 时间只由调用方通过 `update(dt)` 推进，本模块从不读取时钟。

/// 缓动函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// 线性
    #[default]
    Linear,
    /// `1 - (1 - t)^3`
    EaseOutCubic,
}

impl Easing {
    /// 对 `t` 应用缓动，`t` 先钳制到 [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// 标量补间
#[derive(Debug, Clone)]
pub struct Tween {
    duration: f32,
    elapsed: f32,
    from: f32,
    to: f32,
    easing: Easing,
    active: bool,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            from: 0.0,
            to: 0.0,
            easing,
            active: false,
        }
    }

    /// 开始（或重新开始）动画，进度立即归零
    pub fn start(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = to;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// 推进时间并返回当前值
    pub fn update(&mut self, dt: f32) -> f32 {
        if !self.active {
            return self.to;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration.max(0.0);
            self.active = false;
        }
        self.value()
    }

    /// 当前值；空闲时恒为终值
    pub fn value(&self) -> f32 {
        if !self.active {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 线性进度 [0, 1]
    pub fn progress(&self) -> f32 {
        if !self.active {
            return 1.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// 立即结束，停在终值
    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed = self.duration.max(0.0);
    }

    /// 直接设为空闲并停在 `value`
    pub fn set(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.active = false;
    }

    /// 空闲时重新开始，用于循环动画；返回是否重新开始
    pub fn restart_if_idle(&mut self, from: f32, to: f32) -> bool {
        if self.active {
            return false;
        }
        self.start(from, to);
        true
    }
}
