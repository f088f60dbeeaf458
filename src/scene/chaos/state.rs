//! Chaos State
//!
//! Timer chains are explicit state machines polled against the elapsed time,
//! rather than callbacks that schedule themselves.

use bevy::prelude::*;
use rand::Rng;

use crate::scene::types::{DelayRange, ForceRange, SceneConfig};

/// The four timer chains
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChainKind {
    Texture,
    Force,
    Gravity,
    Reset,
}

impl ChainKind {
    pub const ALL: [ChainKind; 4] = [
        ChainKind::Texture,
        ChainKind::Force,
        ChainKind::Gravity,
        ChainKind::Reset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChainKind::Texture => "texture",
            ChainKind::Force => "force",
            ChainKind::Gravity => "gravity",
            ChainKind::Reset => "reset",
        }
    }

    fn index(self) -> usize {
        match self {
            ChainKind::Texture => 0,
            ChainKind::Force => 1,
            ChainKind::Gravity => 2,
            ChainKind::Reset => 3,
        }
    }
}

/// Lifecycle of a timer chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainState {
    /// Fires when due and re-arms itself
    Active,
    /// Asked to stop; the pending fire still happens, then the chain ends
    Stopping,
    /// No pending fire
    Stopped,
}

#[derive(Clone, Debug)]
pub struct TimerChain {
    pub kind: ChainKind,
    pub state: ChainState,
    /// Elapsed time (seconds) of the pending fire
    pub fire_at: Option<f64>,
    pub delay: DelayRange,
    /// Number of times this chain has fired
    pub fires: u64,
}

impl TimerChain {
    pub fn new(kind: ChainKind, delay: DelayRange) -> Self {
        Self {
            kind,
            state: ChainState::Stopped,
            fire_at: None,
            delay,
            fires: 0,
        }
    }

    /// Whole seconds drawn uniformly from the chain's delay range
    pub fn draw_delay(&self, rng: &mut impl Rng) -> f64 {
        let max = self.delay.max_secs.max(self.delay.min_secs);
        rng.gen_range(self.delay.min_secs..=max) as f64
    }

    /// Arm the chain. A stopping chain is revived with its pending fire so a
    /// quick stop/start never leaves two fires in flight.
    pub fn start(&mut self, now: f64, rng: &mut impl Rng) {
        match self.state {
            ChainState::Active => {}
            ChainState::Stopping => self.state = ChainState::Active,
            ChainState::Stopped => {
                self.state = ChainState::Active;
                self.fire_at = Some(now + self.draw_delay(rng));
            }
        }
    }

    /// Ask the chain to stop after its pending fire
    pub fn stop(&mut self) {
        if self.state == ChainState::Active {
            self.state = ChainState::Stopping;
        }
    }

    /// Fire if due. Returns true when the chain's action should run.
    ///
    /// The active flag is read here, at fire time: a chain stopped after it
    /// was armed still fires once and only then ends.
    pub fn poll(&mut self, now: f64, rng: &mut impl Rng) -> bool {
        let Some(fire_at) = self.fire_at else {
            return false;
        };
        if now < fire_at {
            return false;
        }

        self.fires += 1;
        match self.state {
            ChainState::Active => self.fire_at = Some(now + self.draw_delay(rng)),
            ChainState::Stopping | ChainState::Stopped => {
                self.state = ChainState::Stopped;
                self.fire_at = None;
            }
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.state == ChainState::Active
    }
}

/// Resource holding the four chains
#[derive(Resource, Clone, Debug)]
pub struct ChaosSchedule {
    chains: [TimerChain; 4],
}

impl Default for ChaosSchedule {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl ChaosSchedule {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            chains: [
                TimerChain::new(ChainKind::Texture, config.texture_delay),
                TimerChain::new(ChainKind::Force, config.force_delay),
                TimerChain::new(ChainKind::Gravity, config.gravity_delay),
                TimerChain::new(ChainKind::Reset, config.reset_delay),
            ],
        }
    }

    pub fn chain(&self, kind: ChainKind) -> &TimerChain {
        &self.chains[kind.index()]
    }

    pub fn chain_mut(&mut self, kind: ChainKind) -> &mut TimerChain {
        &mut self.chains[kind.index()]
    }

    pub fn start_all(&mut self, now: f64, rng: &mut impl Rng) {
        for chain in &mut self.chains {
            chain.start(now, rng);
        }
    }

    pub fn stop_all(&mut self) {
        for chain in &mut self.chains {
            chain.stop();
        }
    }

    /// Poll every chain, returning the kinds that fired in chain order
    pub fn poll(&mut self, now: f64, rng: &mut impl Rng) -> Vec<ChainKind> {
        self.chains
            .iter_mut()
            .filter_map(|chain| chain.poll(now, rng).then_some(chain.kind))
            .collect()
    }

    pub fn all_stopped(&self) -> bool {
        self.chains.iter().all(|c| c.state == ChainState::Stopped)
    }
}

/// Gravity with each axis in [-1, 1], in steps of 0.1
pub fn random_gravity(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(-10..=10) as f32 / 10.0,
        rng.gen_range(-10..=10) as f32 / 10.0,
    )
}

/// Earthquake force drawn from `range` in steps of 0.1
pub fn random_earthquake_force(range: ForceRange, rng: &mut impl Rng) -> f32 {
    let lo = (range.min * 10.0).round() as i32;
    let hi = ((range.max * 10.0).round() as i32).max(lo);
    rng.gen_range(lo..=hi) as f32 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_start_arms_within_delay_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let mut chain = TimerChain::new(ChainKind::Gravity, DelayRange::new(3, 10));
            chain.start(100.0, &mut rng);
            let at = chain.fire_at.unwrap();
            assert!((103.0..=110.0).contains(&at));
            assert_eq!(at.fract(), 0.0);
        }
    }

    #[test]
    fn test_active_chain_rearms_after_fire() {
        let mut rng = rng();
        let mut chain = TimerChain::new(ChainKind::Texture, DelayRange::new(6, 15));
        chain.start(0.0, &mut rng);
        let at = chain.fire_at.unwrap();

        assert!(!chain.poll(at - 0.5, &mut rng));
        assert!(chain.poll(at, &mut rng));
        let next = chain.fire_at.unwrap();
        assert!(next >= at + 6.0 && next <= at + 15.0);
        assert!(chain.is_active());
        assert_eq!(chain.fires, 1);
    }

    #[test]
    fn test_stopped_chain_still_fires_pending_once() {
        let mut rng = rng();
        let mut chain = TimerChain::new(ChainKind::Force, DelayRange::new(6, 15));
        chain.start(0.0, &mut rng);
        let at = chain.fire_at.unwrap();

        chain.stop();
        assert_eq!(chain.state, ChainState::Stopping);

        // The already-armed fire goes off...
        assert!(chain.poll(at, &mut rng));
        // ...but nothing is rescheduled.
        assert_eq!(chain.state, ChainState::Stopped);
        assert!(chain.fire_at.is_none());
        assert!(!chain.poll(at + 1000.0, &mut rng));
        assert_eq!(chain.fires, 1);
    }

    #[test]
    fn test_restart_while_stopping_keeps_single_pending_fire() {
        let mut rng = rng();
        let mut chain = TimerChain::new(ChainKind::Reset, DelayRange::new(6, 15));
        chain.start(0.0, &mut rng);
        let at = chain.fire_at.unwrap();

        chain.stop();
        chain.start(1.0, &mut rng);
        assert!(chain.is_active());
        assert_eq!(chain.fire_at, Some(at));
    }

    #[test]
    fn test_start_on_active_chain_is_noop() {
        let mut rng = rng();
        let mut chain = TimerChain::new(ChainKind::Reset, DelayRange::new(6, 15));
        chain.start(0.0, &mut rng);
        let at = chain.fire_at;
        chain.start(5.0, &mut rng);
        assert_eq!(chain.fire_at, at);
    }

    #[test]
    fn test_schedule_start_and_stop_all() {
        let mut rng = rng();
        let mut schedule = ChaosSchedule::default();
        assert!(schedule.all_stopped());

        schedule.start_all(0.0, &mut rng);
        for kind in ChainKind::ALL {
            assert!(schedule.chain(kind).is_active());
        }

        schedule.stop_all();
        let fired = schedule.poll(1_000.0, &mut rng);
        assert_eq!(fired, ChainKind::ALL.to_vec());
        assert!(schedule.all_stopped());
        assert!(schedule.poll(2_000.0, &mut rng).is_empty());
    }

    #[test]
    fn test_random_gravity_and_force_ranges() {
        let mut rng = rng();
        for _ in 0..200 {
            let g = random_gravity(&mut rng);
            assert!((-1.0..=1.0).contains(&g.x));
            assert!((-1.0..=1.0).contains(&g.y));

            let f = random_earthquake_force(ForceRange { min: 2.0, max: 5.0 }, &mut rng);
            assert!((2.0..=5.0).contains(&f));
        }
    }
}
