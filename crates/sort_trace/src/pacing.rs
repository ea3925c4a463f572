use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use crate::step::StepSink;

#[derive(Clone, Copy, Debug)]
pub struct PacingParams {
    pub step_delay_ms: u64,
    pub replay_delay_ms: u64,
    pub default_speed: f32,
    pub speed_step: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

pub const PACING: PacingParams = PacingParams {
    step_delay_ms: 500,
    replay_delay_ms: 1000,
    default_speed: 1.0,
    speed_step: 0.5,
    min_speed: 0.5,
    max_speed: 5.0,
};

// Clones share one value. Only `faster`/`slower` clamp.
#[derive(Clone, Debug)]
pub struct Speed(Arc<AtomicU32>);

impl Default for Speed {
    fn default() -> Self {
        Self::new(PACING.default_speed)
    }
}

impl Speed {
    pub fn new(value: f32) -> Self {
        Self(Arc::new(AtomicU32::new(value.to_bits())))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }

    pub fn faster(&self) -> f32 {
        let next = (self.get() + PACING.speed_step).min(PACING.max_speed);
        self.set(next);
        next
    }

    pub fn slower(&self) -> f32 {
        let next = (self.get() - PACING.speed_step).max(PACING.min_speed);
        self.set(next);
        next
    }
}

#[derive(Clone, Debug)]
pub struct Pacer {
    speed: Speed,
    base: Duration,
}

impl Pacer {
    pub fn new(speed: Speed, base: Duration) -> Self {
        Self { speed, base }
    }

    pub fn for_steps(speed: Speed) -> Self {
        Self::new(speed, Duration::from_millis(PACING.step_delay_ms))
    }

    pub fn for_replay(speed: Speed) -> Self {
        Self::new(speed, Duration::from_millis(PACING.replay_delay_ms))
    }

    pub fn disabled() -> Self {
        Self::new(Speed::default(), Duration::ZERO)
    }

    pub fn speed(&self) -> &Speed {
        &self.speed
    }

    pub fn delay(&self) -> Duration {
        // Whole milliseconds; a non-positive speed saturates instead of panicking.
        let ms = self.base.as_millis() as f32 / self.speed.get();
        Duration::from_millis(ms as u64)
    }

    pub fn pause(&self) {
        let delay = self.delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

pub struct Paced<K> {
    inner: K,
    pacer: Pacer,
}

impl<K> Paced<K> {
    pub fn new(inner: K, pacer: Pacer) -> Self {
        Self { inner, pacer }
    }

    pub fn into_inner(self) -> K {
        self.inner
    }
}

impl<S, K: StepSink<S>> StepSink<S> for Paced<K> {
    fn emit(&mut self, step: S) {
        self.inner.emit(step);
        self.pacer.pause();
    }
}
