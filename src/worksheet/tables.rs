//! Hardcoded per-group parameter tables for the five worksheet problems.
//!
//! The assignment sheet defines eight parameter groups `A`–`H` per problem;
//! the tables are compile-time constants, not loaded from storage.

use super::ladder::LadderParams;
use super::mesh::MeshParams;
use super::nodal::NodalParams;
use super::thevenin::TheveninParams;
use super::transient::RlStepParams;
use super::Group;

/// Ladder parameters for `group`.
#[must_use]
pub const fn ladder(group: Group) -> LadderParams {
    #[rustfmt::skip]
    let (u1, u2, r1, r2, r3, r4, r5, r6, r7, r8) = match group {
        Group::A => (80.0,  120.0, 350.0, 650.0, 410.0, 130.0, 360.0, 750.0, 310.0, 190.0),
        Group::B => (95.0,  115.0, 650.0, 730.0, 340.0, 330.0, 410.0, 830.0, 340.0, 220.0),
        Group::C => (100.0, 80.0,  450.0, 810.0, 190.0, 220.0, 220.0, 720.0, 260.0, 180.0),
        Group::D => (105.0, 85.0,  420.0, 980.0, 330.0, 280.0, 310.0, 710.0, 240.0, 200.0),
        Group::E => (115.0, 55.0,  485.0, 660.0, 100.0, 340.0, 575.0, 815.0, 255.0, 225.0),
        Group::F => (125.0, 65.0,  510.0, 500.0, 550.0, 250.0, 300.0, 800.0, 330.0, 250.0),
        Group::G => (130.0, 60.0,  380.0, 420.0, 330.0, 440.0, 450.0, 650.0, 410.0, 275.0),
        Group::H => (135.0, 80.0,  680.0, 600.0, 260.0, 310.0, 575.0, 870.0, 355.0, 265.0),
    };
    LadderParams { u1, u2, r1, r2, r3, r4, r5, r6, r7, r8 }
}

/// Thevenin parameters for `group`.
#[must_use]
pub const fn thevenin(group: Group) -> TheveninParams {
    #[rustfmt::skip]
    let (u, r1, r2, r3, r4, r5, r6) = match group {
        Group::A => (50.0,  100.0, 525.0, 620.0, 210.0, 530.0, 100.0),
        Group::B => (100.0, 50.0,  310.0, 610.0, 220.0, 570.0, 200.0),
        Group::C => (200.0, 70.0,  220.0, 630.0, 240.0, 450.0, 300.0),
        Group::D => (150.0, 200.0, 200.0, 660.0, 200.0, 550.0, 400.0),
        Group::E => (250.0, 150.0, 335.0, 625.0, 245.0, 600.0, 150.0),
        Group::F => (130.0, 180.0, 350.0, 600.0, 195.0, 650.0, 250.0),
        Group::G => (180.0, 250.0, 315.0, 615.0, 180.0, 460.0, 350.0),
        Group::H => (220.0, 190.0, 360.0, 580.0, 205.0, 560.0, 180.0),
    };
    TheveninParams { u, r1, r2, r3, r4, r5, r6 }
}

/// Nodal-analysis parameters for `group`.
#[must_use]
pub const fn nodal(group: Group) -> NodalParams {
    #[rustfmt::skip]
    let (u, i1, i2, r1, r2, r3, r4, r5) = match group {
        Group::A => (120.0, 0.9,  0.7,  53.0, 49.0, 65.0, 39.0, 32.0),
        Group::B => (150.0, 0.7,  0.8,  49.0, 45.0, 61.0, 34.0, 34.0),
        Group::C => (110.0, 0.85, 0.75, 44.0, 31.0, 56.0, 20.0, 30.0),
        Group::D => (115.0, 0.6,  0.9,  50.0, 38.0, 48.0, 37.0, 28.0),
        Group::E => (135.0, 0.55, 0.65, 52.0, 42.0, 52.0, 42.0, 21.0),
        Group::F => (145.0, 0.75, 0.85, 48.0, 44.0, 53.0, 36.0, 25.0),
        Group::G => (160.0, 0.65, 0.45, 46.0, 41.0, 53.0, 33.0, 29.0),
        Group::H => (130.0, 0.95, 0.50, 47.0, 39.0, 58.0, 28.0, 25.0),
    };
    NodalParams { u, i1, i2, r1, r2, r3, r4, r5 }
}

/// Mesh-analysis parameters for `group`.
#[must_use]
pub const fn mesh(group: Group) -> MeshParams {
    #[rustfmt::skip]
    let (u1, u2, r1, r2, l1, l2, c1, c2, frequency) = match group {
        Group::A => (35.0, 55.0, 12.0, 14.0, 120.0e-3, 100.0e-3, 200.0e-6, 105.0e-6, 70.0),
        Group::B => (25.0, 40.0, 11.0, 15.0, 100.0e-3, 85.0e-3,  220.0e-6, 95.0e-6,  80.0),
        Group::C => (35.0, 45.0, 10.0, 13.0, 220.0e-3, 70.0e-3,  230.0e-6, 85.0e-6,  75.0),
        Group::D => (45.0, 50.0, 13.0, 15.0, 180.0e-3, 90.0e-3,  210.0e-6, 75.0e-6,  85.0),
        Group::E => (50.0, 30.0, 14.0, 13.0, 130.0e-3, 60.0e-3,  100.0e-6, 65.0e-6,  90.0),
        Group::F => (20.0, 35.0, 12.0, 10.0, 170.0e-3, 80.0e-3,  150.0e-6, 90.0e-6,  65.0),
        Group::G => (55.0, 50.0, 13.0, 12.0, 140.0e-3, 60.0e-3,  160.0e-6, 80.0e-6,  60.0),
        Group::H => (65.0, 60.0, 10.0, 10.0, 160.0e-3, 75.0e-3,  155.0e-6, 70.0e-6,  95.0),
    };
    MeshParams { u1, u2, r1, r2, l1, l2, c1, c2, frequency }
}

/// RL step-response parameters for `group`.
#[must_use]
pub const fn transient(group: Group) -> RlStepParams {
    #[rustfmt::skip]
    let (u, l, r, i0) = match group {
        Group::A => (40.0, 50.0, 10.0, 16.0),
        Group::B => (30.0, 10.0, 20.0, 15.0),
        Group::C => (35.0, 5.0,  30.0, 14.0),
        Group::D => (25.0, 5.0,  25.0, 12.0),
        Group::E => (40.0, 30.0, 40.0, 11.0),
        Group::F => (22.0, 30.0, 15.0, 10.0),
        Group::G => (20.0, 50.0, 25.0, 8.0),
        Group::H => (18.0, 50.0, 40.0, 5.0),
    };
    RlStepParams { u, l, r, i0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_has_positive_elements() {
        for group in Group::ALL {
            let lp = ladder(group);
            assert!(lp.r1 > 0.0 && lp.r6 > 0.0 && lp.r8 > 0.0);
            let tp = thevenin(group);
            assert!(tp.u > 0.0 && tp.r3 > 0.0);
            let np = nodal(group);
            assert!(np.r1 > 0.0 && np.r2 > 0.0);
            let mp = mesh(group);
            assert!(mp.frequency > 0.0 && mp.l2 > 0.0 && mp.c1 > 0.0);
            let rp = transient(group);
            assert!(rp.r > 0.0 && rp.l > 0.0);
        }
    }
}
