//! Fried and Fried (1996) initial-attack containment
//!
//! The free-burning fire is an ellipse that keeps its length-to-width ratio
//! while the head and back advance at constant rates. Line is built on both
//! flanks at once, starting from the attack end and working around to the
//! opposite end, offset `attack_dist` from the fire edge. Only the left flank
//! is integrated; the right flank is its mirror image.
//!
//! The builder's progress is tracked as the ellipse parameter θ, running from
//! 0 at the attack end to π at the far end. With flank production `P`, the
//! fire edge moving outward at `v_n` and along the line at `v_t`, the builder
//! advances at
//!
//! ```text
//! dθ/dt = (sqrt(P² - v_n²) - v_t) / |∂r/∂θ|
//! ```
//!
//! # References
//! - Fried, J.S., Fried, B.D. (1996). "Simulating wildfire containment with
//!   realistic tactics." Forest Science, 42(3), 267-281.
//! - Albini, F.A., Korovin, G.N., Gorovaya, E.H. (1978). "Mathematical analysis
//!   of forest fire suppression." USDA Forest Service Research Paper INT-207.

use std::f64::consts::PI;

use nalgebra::{Point2, Vector2};
use tracing::debug;

use super::{ContainInput, ContainOutcome, ContainResource, ContainStatus, ContainmentSimulator, Tactic};
use crate::physics::fire_shape;
use crate::SMIDGEN;

/// Square chains per acre
const SQ_CHAINS_PER_ACRE: f64 = 10.0;

/// Step doublings tried after an overflow
const MAX_RETRIES: usize = 6;

/// Shortest expected containment time used to size the step (h)
const MIN_EXPECTED_HOURS: f64 = 1.0 / 60.0;

/// Default containment model
#[derive(Debug, Clone, Copy, Default)]
pub struct FriedFriedSimulator;

impl ContainmentSimulator for FriedFriedSimulator {
    fn run(&self, input: &ContainInput) -> ContainOutcome {
        let fire = FireEllipse::new(input);
        let Some(first_arrival) = first_arrival(&input.resources) else {
            return ContainOutcome::unattacked(ContainStatus::Reported, fire.head(0.0), fire.back(0.0));
        };

        let mut dt = fire.initial_step(input, first_arrival / 60.0);
        let mut outcome = simulate(input, &fire, first_arrival / 60.0, dt);
        let mut retries = 0;
        while input.retry && outcome.status == ContainStatus::Overflow && retries < MAX_RETRIES {
            dt *= 2.0;
            retries += 1;
            debug!(retries, dt, "containment overflow, doubling the time step");
            outcome = simulate(input, &fire, first_arrival / 60.0, dt);
        }

        debug!(
            status = ?outcome.status,
            steps = outcome.step,
            line = outcome.final_line,
            size = outcome.final_size,
            "containment run finished"
        );
        outcome
    }
}

/// Earliest arrival (min) of a resource that can build line
fn first_arrival(resources: &[ContainResource]) -> Option<f64> {
    resources
        .iter()
        .filter(|r| r.production > SMIDGEN && r.duration > SMIDGEN)
        .map(|r| r.arrival.max(0.0))
        .min_by(f64::total_cmp)
}

/// Line production on one flank (ch/h) at `minutes` since report
fn flank_production(resources: &[ContainResource], minutes: f64) -> f64 {
    resources
        .iter()
        .filter(|r| r.arrival <= minutes && minutes < r.arrival + r.duration)
        .map(|r| r.production)
        .sum::<f64>()
        / 2.0
}

fn arrivals_pending(resources: &[ContainResource], minutes: f64) -> bool {
    resources
        .iter()
        .any(|r| r.production > SMIDGEN && r.duration > SMIDGEN && r.arrival > minutes)
}

/// Free-burning ellipse in attack coordinates
///
/// The x axis points from the fire's center toward the attack end.
struct FireEllipse {
    head0: f64,
    back0: f64,
    head_rate: f64,
    back_rate: f64,
    lw: f64,
    /// +1 when the attack end is the head, -1 when it is the back
    side: f64,
}

/// Ellipse shape at one instant and its growth rates
struct Shape {
    a: f64,
    b: f64,
    c: f64,
    a_rate: f64,
    b_rate: f64,
    c_rate: f64,
}

impl FireEllipse {
    fn new(input: &ContainInput) -> Self {
        let lw = input.lw_ratio.max(1.0);
        let e = fire_shape::eccentricity(lw);
        let length = (40.0 * input.report_size.max(0.0) * lw / PI).sqrt();
        let head_rate = input.report_rate.max(0.0);
        Self {
            head0: length * (1.0 + e) / 2.0,
            back0: length * (1.0 - e) / 2.0,
            head_rate,
            back_rate: fire_shape::backing_rate(head_rate, e),
            lw,
            side: match input.tactic {
                Tactic::HeadAttack => 1.0,
                Tactic::RearAttack => -1.0,
            },
        }
    }

    /// Head distance from the ignition point (ch) at `t` hours
    fn head(&self, t: f64) -> f64 {
        self.head0 + self.head_rate * t
    }

    /// Back distance from the ignition point (ch) at `t` hours
    fn back(&self, t: f64) -> f64 {
        self.back0 + self.back_rate * t
    }

    fn shape(&self, t: f64) -> Shape {
        let a = (self.head(t) + self.back(t)) / 2.0;
        let a_rate = (self.head_rate + self.back_rate) / 2.0;
        Shape {
            a,
            b: a / self.lw,
            c: self.side * (self.head(t) - self.back(t)) / 2.0,
            a_rate,
            b_rate: a_rate / self.lw,
            c_rate: self.side * (self.head_rate - self.back_rate) / 2.0,
        }
    }

    /// Step (h) that would contain the fire as it stood at first arrival in `min_steps` steps
    fn initial_step(&self, input: &ContainInput, arrival: f64) -> f64 {
        let length = self.head(arrival) + self.back(arrival);
        let width = fire_shape::width(length, self.lw);
        let half_line = fire_shape::perimeter(length, width) / 2.0 + PI * input.attack_dist.max(0.0);
        let production: f64 = input
            .resources
            .iter()
            .filter(|r| r.duration > SMIDGEN)
            .map(|r| r.production.max(0.0))
            .sum::<f64>()
            / 2.0;
        let hours = if production > SMIDGEN {
            (half_line / production).max(MIN_EXPECTED_HOURS)
        } else {
            MIN_EXPECTED_HOURS
        };
        hours / input.min_steps.max(1) as f64
    }
}

/// Builder kinematics at parameter θ on the offset line
struct Builder {
    /// Position in attack coordinates
    position: Vector2<f64>,
    /// Outward speed of the fire edge (ch/h)
    normal_speed: f64,
    /// Speed of the fire edge along the line, positive toward increasing θ (ch/h)
    tangent_speed: f64,
    /// Length of the offset line per unit θ (ch)
    arc_rate: f64,
}

impl Shape {
    fn builder(&self, theta: f64, offset: f64) -> Builder {
        let (sin, cos) = theta.sin_cos();
        let edge = Vector2::new(self.c + self.a * cos, self.b * sin);
        let velocity = Vector2::new(self.c_rate + self.a_rate * cos, self.b_rate * sin);
        let tangent = Vector2::new(-self.a * sin, self.b * cos);
        let len = tangent.norm();
        if len < SMIDGEN {
            return Builder {
                position: edge,
                normal_speed: 0.0,
                tangent_speed: 0.0,
                arc_rate: SMIDGEN,
            };
        }
        let t_hat = tangent / len;
        let n_hat = Vector2::new(self.b * cos, self.a * sin) / len;
        Builder {
            position: edge + n_hat * offset,
            normal_speed: velocity.dot(&n_hat).max(0.0),
            tangent_speed: velocity.dot(&t_hat),
            arc_rate: len + offset * self.a * self.b / (len * len),
        }
    }
}

/// One integration of the line around the flank
fn simulate(input: &ContainInput, fire: &FireEllipse, arrival: f64, dt: f64) -> ContainOutcome {
    let offset = input.attack_dist.max(0.0);
    let to_real = |p: Vector2<f64>| Point2::new(fire.side * p.x, p.y);

    let mut outcome = ContainOutcome::unattacked(ContainStatus::Attacked, fire.head(0.0), fire.back(0.0));
    outcome.initial_attack_head = fire.head(arrival);
    outcome.initial_attack_back = fire.back(arrival);
    outcome.attack_head = outcome.initial_attack_head;
    outcome.attack_back = outcome.initial_attack_back;

    let mut t = arrival;
    let mut theta = 0.0_f64;
    let mut line = 0.0;
    let mut started = false;
    let mut step = 0;

    let status = loop {
        if step >= input.max_steps {
            break ContainStatus::Overflow;
        }
        if fire.head(t) > input.dist_limit {
            break ContainStatus::DistLimit;
        }

        let minutes = 60.0 * t;
        let production = flank_production(&input.resources, minutes);
        let shape = fire.shape(t);
        let builder = shape.builder(theta, offset);
        let net = if production > builder.normal_speed {
            (production * production - builder.normal_speed * builder.normal_speed).sqrt() - builder.tangent_speed
        } else {
            0.0
        };

        if production < SMIDGEN || net <= 0.0 {
            if arrivals_pending(&input.resources, minutes) {
                t += dt;
                step += 1;
                continue;
            }
            break if production < SMIDGEN {
                ContainStatus::Exhausted
            } else {
                ContainStatus::Overrun
            };
        }

        if !started {
            started = true;
            outcome.attack_head = fire.head(t);
            outcome.attack_back = fire.back(t);
            outcome.perimeter.push(to_real(builder.position));
        }

        theta += net / builder.arc_rate * dt;
        line += production * dt;
        t += dt;
        step += 1;

        let theta_end = theta.min(PI);
        outcome.perimeter.push(to_real(fire.shape(t).builder(theta_end, offset).position));
        if theta >= PI {
            break ContainStatus::Contained;
        }
    };

    outcome.status = status;
    outcome.step = step;
    outcome.final_time = 60.0 * t;
    outcome.final_line = 2.0 * line;
    outcome.final_size = enclosed_area(&outcome.perimeter) / SQ_CHAINS_PER_ACRE;
    outcome.resources_used = input.resources.iter().filter(|r| r.arrival <= outcome.final_time).count();
    outcome.final_cost = input
        .resources
        .iter()
        .filter(|r| r.arrival <= outcome.final_time)
        .map(|r| {
            let hours = ((outcome.final_time.min(r.arrival + r.duration) - r.arrival) / 60.0).max(0.0);
            r.base_cost + r.hour_cost * hours
        })
        .sum();

    for p in &outcome.perimeter {
        outcome.x_min = outcome.x_min.min(p.x);
        outcome.x_max = outcome.x_max.max(p.x);
        outcome.y_max = outcome.y_max.max(p.y);
    }
    outcome
}

/// Area (ch²) of the left-flank line closed by its mirror image
fn enclosed_area(flank: &[Point2<f64>]) -> f64 {
    if flank.len() < 2 {
        return 0.0;
    }
    let ring = flank
        .iter()
        .copied()
        .chain(flank.iter().rev().map(|p| Point2::new(p.x, -p.y)));
    let closed: Vec<Point2<f64>> = ring.collect();
    let twice: f64 = closed
        .iter()
        .zip(closed.iter().cycle().skip(1))
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum();
    twice.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn crew(arrival: f64, production: f64) -> ContainResource {
        ContainResource {
            name: "Engine".into(),
            arrival,
            duration: 480.0,
            production,
            base_cost: 500.0,
            hour_cost: 100.0,
        }
    }

    fn input(rate: f64, resources: Vec<ContainResource>) -> ContainInput {
        ContainInput {
            report_size: 1.0,
            report_rate: rate,
            lw_ratio: 2.0,
            resources,
            tactic: Tactic::HeadAttack,
            attack_dist: 0.0,
            dist_limit: 1.0e6,
            retry: true,
            min_steps: 250,
            max_steps: 10_000,
        }
    }

    #[test]
    fn test_strong_crew_contains() {
        let out = FriedFriedSimulator.run(&input(5.0, vec![crew(30.0, 40.0)]));
        assert_eq!(out.status, ContainStatus::Contained);
        assert!(out.final_size > 1.0, "size {}", out.final_size);
        assert!(out.final_line > 0.0);
        assert!(out.final_time > 30.0);
        assert_eq!(out.resources_used, 1);
        assert!(out.final_cost > 500.0);
        assert!(out.x_min < 0.0 && out.x_max > 0.0 && out.y_max > 0.0);
    }

    #[test]
    fn test_weak_crew_is_overrun() {
        let out = FriedFriedSimulator.run(&input(60.0, vec![crew(10.0, 20.0)]));
        assert_eq!(out.status, ContainStatus::Overrun);
        let (item, size) = super::super::reported_outcome(&out);
        assert_eq!(size, -1.0);
        assert_eq!(item, 2);
    }

    #[test]
    fn test_no_production_is_unattacked() {
        let out = FriedFriedSimulator.run(&input(5.0, vec![crew(10.0, 0.0)]));
        assert_eq!(out.status, ContainStatus::Reported);
        assert_eq!(out.final_line, 0.0);
    }

    #[test]
    fn test_report_geometry() {
        let out = FriedFriedSimulator.run(&input(5.0, Vec::new()));
        let e = fire_shape::eccentricity(2.0);
        let length = (40.0 * 2.0 / PI).sqrt();
        assert_relative_eq!(out.report_head, length * (1.0 + e) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(out.report_back + out.report_head, length, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_limit() {
        let mut run = input(5.0, vec![crew(600.0, 40.0)]);
        run.dist_limit = 10.0;
        let out = FriedFriedSimulator.run(&run);
        assert_eq!(out.status, ContainStatus::DistLimit);
    }

    #[test]
    fn test_rear_attack_starts_at_back() {
        let mut run = input(5.0, vec![crew(30.0, 40.0)]);
        run.tactic = Tactic::RearAttack;
        let out = FriedFriedSimulator.run(&run);
        assert_eq!(out.status, ContainStatus::Contained);
        assert!(out.perimeter[0].x < 0.0);
    }

    #[test]
    fn test_square_area() {
        let flank = [Point2::new(1.0, 0.0), Point2::new(1.0, 1.0), Point2::new(-1.0, 1.0), Point2::new(-1.0, 0.0)];
        assert_relative_eq!(enclosed_area(&flank), 4.0, epsilon = 1e-12);
    }
}
