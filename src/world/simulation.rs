use std::ops::AddAssign;

use tracing::{debug, trace};

use super::config::{CollisionPass, SimulationConfig};
use crate::collision::{check_collision, is_closing, resolve_collision};
use crate::error::{KernelError, KernelResult};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::shapes::line_segment::EPSILON;

/// Counters for one tick or one collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Unordered pairs visited.
    pub pairs_tested: usize,
    /// Pairs that passed the closing-velocity filter.
    pub pairs_closing: usize,
    /// Pairs that touched and received an impulse.
    pub collisions: usize,
}

impl AddAssign for StepStats {
    fn add_assign(&mut self, rhs: Self) {
        self.pairs_tested += rhs.pairs_tested;
        self.pairs_closing += rhs.pairs_closing;
        self.collisions += rhs.collisions;
    }
}

/// Advances `bodies` by one tick under `config`.
///
/// Each body is integrated and held inside the bounds; the pairwise pass
/// runs once after all bodies move, or after every body with
/// [`CollisionPass::PerBody`].
///
/// On `Err` the collection is left partly stepped: bodies may already be
/// moved and some pairs already resolved.
pub fn tick(bodies: &mut [Body], config: &SimulationConfig) -> KernelResult<StepStats> {
    let mut stats = StepStats::default();

    match config.collision_pass {
        CollisionPass::AfterIntegration => {
            for body in bodies.iter_mut() {
                advance(body, config);
            }
            stats += resolve_collisions(bodies)?;
        }
        CollisionPass::PerBody => {
            for i in 0..bodies.len() {
                advance(&mut bodies[i], config);
                stats += resolve_collisions(bodies)?;
            }
        }
    }

    debug!(
        bodies = bodies.len(),
        pairs = stats.pairs_tested,
        closing = stats.pairs_closing,
        collisions = stats.collisions,
        "tick"
    );
    Ok(stats)
}

fn advance(body: &mut Body, config: &SimulationConfig) {
    integrator::integrate(body);
    config.bounds.contain(body, config.bounce_at_borders);
}

/// Runs the pairwise pass over ascending index pairs `(i, j)`, `i < j`.
///
/// Pairs resolve one after another, so a body's velocity as changed by an
/// earlier pair is what later pairs see.
pub fn resolve_collisions(bodies: &mut [Body]) -> KernelResult<StepStats> {
    let mut stats = StepStats::default();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            stats.pairs_tested += 1;

            if !is_closing(&bodies[i], &bodies[j]) {
                trace!(i, j, "pair not closing");
                continue;
            }
            stats.pairs_closing += 1;

            let Some(contact) = check_collision(&bodies[i], &bodies[j])? else {
                continue;
            };

            // Get mutable references using split_at_mut to satisfy the borrow checker
            let (head, tail) = bodies.split_at_mut(j);
            if resolve_collision(&mut head[i], &mut tail[0], &contact) {
                trace!(i, j, point = ?contact.point, "collision resolved");
                stats.collisions += 1;
            }
        }
    }

    Ok(stats)
}

/// The body collection and the settings it is stepped with.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    pub bodies: Vec<Body>,
    pub config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
        }
    }

    /// Adds a body and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Removes a body; later bodies shift down by one index.
    pub fn remove_body(&mut self, index: usize) -> KernelResult<Body> {
        self.check_index(index)?;
        Ok(self.bodies.remove(index))
    }

    pub fn body(&self, index: usize) -> KernelResult<&Body> {
        let count = self.bodies.len();
        self.bodies
            .get(index)
            .ok_or(KernelError::BodyIndexOutOfRange { index, count })
    }

    pub fn body_mut(&mut self, index: usize) -> KernelResult<&mut Body> {
        let count = self.bodies.len();
        self.bodies
            .get_mut(index)
            .ok_or(KernelError::BodyIndexOutOfRange { index, count })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> KernelResult<StepStats> {
        tick(&mut self.bodies, &self.config)
    }

    /// Whether `candidate` would overlap any existing body, skipping `ignore`.
    ///
    /// Runs the narrow phase only; velocities play no part and nothing is
    /// mutated. Bodies sharing a centre always overlap, even though the
    /// narrow phase has no normal to report for them.
    pub fn check_placement(&self, candidate: &Body, ignore: Option<usize>) -> KernelResult<bool> {
        for (index, body) in self.bodies.iter().enumerate() {
            if Some(index) == ignore {
                continue;
            }
            let same_centre = candidate.position.distance_squared(body.position) < EPSILON;
            if same_centre || check_collision(candidate, body)?.is_some() {
                debug!(blocking = index, position = ?candidate.position, "placement blocked");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Adds `body` unless it would overlap an existing one.
    pub fn try_place(&mut self, body: Body) -> KernelResult<Option<usize>> {
        if self.check_placement(&body, None)? {
            return Ok(None);
        }
        Ok(Some(self.add_body(body)))
    }

    /// Drags a body to `position` if it would not overlap any other body.
    /// Returns whether the body moved.
    pub fn move_body(&mut self, index: usize, position: Vec2) -> KernelResult<bool> {
        let mut candidate = self.body(index)?.clone();
        candidate.position = position;
        if self.check_placement(&candidate, Some(index))? {
            return Ok(false);
        }
        self.bodies[index].position = position;
        Ok(true)
    }

    /// Index of the first body whose outline contains `point`.
    pub fn body_at(&self, point: Vec2) -> Option<usize> {
        self.bodies.iter().position(|body| body.contains_point(point))
    }

    /// Sum of `mass * velocity` over all bodies.
    pub fn total_momentum(&self) -> Vec2 {
        self.bodies
            .iter()
            .fold(Vec2::ZERO, |sum, body| sum + body.momentum())
    }

    fn check_index(&self, index: usize) -> KernelResult<()> {
        self.body(index).map(|_| ())
    }
}
