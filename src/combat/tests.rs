//! Combat domain: tests for classification, guards, and timer windows.

use super::attacks::{DodgeSide, KickVariant, MoveKey, PunchVariant};
use super::components::CombatState;
use super::resources::CombatTuning;
use super::timers::{ActionTimers, TimerPurpose, apply_expiry};

fn armed_state() -> CombatState {
    CombatState {
        combat_mode: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Punch classification
// -----------------------------------------------------------------------------

#[test]
fn test_left_key_beats_cursor_rules() {
    // left pressed with a strong upward cursor delta: rule 1 wins over the
    // uppercut rule
    let mut state = armed_state();
    state.left = true;
    let variant = state.try_punch(0.2, &CombatTuning::default()).unwrap();
    assert_eq!(variant, PunchVariant::LeftHook);
    assert_eq!(state.pending_damage, 8.0);
}

#[test]
fn test_right_key_selects_right_hook() {
    let mut state = armed_state();
    state.right = true;
    state.forward = true;
    let variant = state.try_punch(-0.5, &CombatTuning::default()).unwrap();
    assert_eq!(variant, PunchVariant::RightHook);
    assert_eq!(state.pending_damage, 8.0);
}

#[test]
fn test_forward_cursor_motion_selects_straight() {
    let mut state = armed_state();
    let variant = state.try_punch(-0.2, &CombatTuning::default()).unwrap();
    assert_eq!(variant, PunchVariant::Straight);
    assert_eq!(state.pending_damage, 10.0);
}

#[test]
fn test_backward_cursor_motion_selects_uppercut() {
    let mut state = armed_state();
    let variant = state.try_punch(0.1, &CombatTuning::default()).unwrap();
    assert_eq!(variant, PunchVariant::Uppercut);
    assert_eq!(state.pending_damage, 15.0);
}

#[test]
fn test_neutral_input_selects_jab() {
    let mut state = armed_state();
    let variant = state.try_punch(0.0, &CombatTuning::default()).unwrap();
    assert_eq!(variant, PunchVariant::Jab);
    assert_eq!(state.pending_damage, 5.0);
    assert!(state.left_side_attack);
}

#[test]
fn test_punch_thresholds_are_exclusive_at_boundary() {
    // Exactly at the thresholds neither cursor rule fires
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    assert_eq!(state.try_punch(-0.15, &tuning), Some(PunchVariant::Jab));
    let mut state = armed_state();
    assert_eq!(state.try_punch(0.05, &tuning), Some(PunchVariant::Jab));
}

// -----------------------------------------------------------------------------
// Kick classification
// -----------------------------------------------------------------------------

#[test]
fn test_kick_side_rules_win_over_cursor() {
    let mut state = armed_state();
    state.left = true;
    let variant = state.try_kick(-0.5, &CombatTuning::default()).unwrap();
    assert_eq!(variant, KickVariant::LeftMiddleKick);
    assert_eq!(state.pending_damage, 10.0);
    assert!(state.left_side_attack);
}

#[test]
fn test_kick_uses_its_own_threshold() {
    // -0.1 is past the kick threshold (-0.05) but not the punch one (-0.15),
    // and well below the uppercut threshold (0.05)
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    assert_eq!(state.try_kick(-0.1, &tuning), Some(KickVariant::HighKick));
    assert_eq!(state.pending_damage, 20.0);

    // The same delta thrown as a punch is only a jab
    let mut state = armed_state();
    assert_eq!(state.try_punch(-0.1, &tuning), Some(PunchVariant::Jab));
    assert_eq!(state.pending_damage, 5.0);
}

#[test]
fn test_neutral_kick_is_low_kick() {
    let mut state = armed_state();
    let variant = state.try_kick(0.0, &CombatTuning::default()).unwrap();
    assert_eq!(variant, KickVariant::LowKick);
    assert_eq!(state.pending_damage, 5.0);
    assert!(!state.upper_body_slot);
}

// -----------------------------------------------------------------------------
// Guard conditions and absorption
// -----------------------------------------------------------------------------

#[test]
fn test_attacks_absorbed_outside_combat_mode() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::default();
    let before = state.clone();
    assert_eq!(state.try_punch(-0.5, &tuning), None);
    assert_eq!(state.try_kick(-0.5, &tuning), None);
    assert_eq!(state.try_dodge(&tuning), None);
    assert!(!state.guard_started(&tuning));
    assert_eq!(state.punching, before.punching);
    assert_eq!(state.pending_damage, before.pending_damage);
    assert_eq!(state.damage_multiplier, before.damage_multiplier);
}

#[test]
fn test_punch_absorbed_while_punching() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    state.try_punch(0.0, &tuning).unwrap();
    assert_eq!(state.try_punch(0.2, &tuning), None);
    // Damage from the first punch stands
    assert_eq!(state.pending_damage, 5.0);
}

#[test]
fn test_attack_flags_never_both_true() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    state.try_kick(0.0, &tuning).unwrap();
    assert!(state.kicking);
    // A punch mid-kick is absorbed, keeping the flags exclusive
    assert_eq!(state.try_punch(0.0, &tuning), None);
    assert!(!(state.punching && state.kicking));

    let mut state = armed_state();
    state.try_punch(0.0, &tuning).unwrap();
    assert_eq!(state.try_kick(0.0, &tuning), None);
    assert!(!(state.punching && state.kicking));
}

#[test]
fn test_directional_edges_clear_attack_locks() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    state.try_punch(0.0, &tuning).unwrap();
    state.set_direction(MoveKey::Forward, true);
    assert!(!state.punching);
    assert!(state.forward);

    state.try_kick(0.0, &tuning).unwrap();
    state.set_direction(MoveKey::Forward, false);
    assert!(!state.kicking);
    assert!(!state.forward);
}

#[test]
fn test_flag_exclusion_over_event_sequences() {
    // Arbitrary interleavings of directional edges and attacks keep the
    // attack flags mutually exclusive
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    let keys = [MoveKey::Forward, MoveKey::Left, MoveKey::Back, MoveKey::Right];
    for round in 0..16 {
        state.set_direction(keys[round % 4], round % 3 != 0);
        if round % 2 == 0 {
            state.try_punch(0.1, &tuning);
        } else {
            state.try_kick(-0.2, &tuning);
        }
        assert!(
            !(state.punching && state.kicking),
            "both attack flags raised at round {round}"
        );
    }
}

// -----------------------------------------------------------------------------
// Guard
// -----------------------------------------------------------------------------

#[test]
fn test_guard_start_then_stop_restores_reduction() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    assert!(state.guard_started(&tuning));
    assert!(state.guarding);
    assert_eq!(state.damage_reduction, 3.0);
    assert!(state.upper_body_slot);

    state.guard_stopped();
    assert!(!state.guarding);
    assert_eq!(state.damage_reduction, 1.0);
}

#[test]
fn test_guard_refused_while_kicking() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    state.try_kick(0.0, &tuning).unwrap();
    assert!(!state.guard_started(&tuning));
    assert!(!state.guarding);
    assert_eq!(state.damage_reduction, 1.0);
}

#[test]
fn test_guard_reentry_is_idempotent() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    assert!(state.guard_started(&tuning));
    assert!(state.guard_started(&tuning));
    assert_eq!(state.damage_reduction, 3.0);
    state.guard_stopped();
    state.guard_stopped();
    assert_eq!(state.damage_reduction, 1.0);
}

// -----------------------------------------------------------------------------
// Dodge
// -----------------------------------------------------------------------------

#[test]
fn test_dodge_direction_selection() {
    let tuning = CombatTuning::default();

    let mut state = armed_state();
    state.right = true;
    assert_eq!(state.try_dodge(&tuning), Some(DodgeSide::Right));

    let mut state = armed_state();
    state.forward = true;
    assert_eq!(state.try_dodge(&tuning), Some(DodgeSide::Right));

    let mut state = armed_state();
    state.right = true;
    state.back = true;
    assert_eq!(state.try_dodge(&tuning), Some(DodgeSide::Right));

    // Idle and pure-left contexts both roll left
    let mut state = armed_state();
    assert_eq!(state.try_dodge(&tuning), Some(DodgeSide::Left));

    let mut state = armed_state();
    state.left = true;
    assert_eq!(state.try_dodge(&tuning), Some(DodgeSide::Left));
}

#[test]
fn test_dodge_refused_mid_attack() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    state.try_punch(0.0, &tuning).unwrap();
    assert_eq!(state.try_dodge(&tuning), None);
    assert!(!state.dodging);
    assert_eq!(state.damage_multiplier, 1.0);
}

#[test]
fn test_dodge_window_then_advantage_window() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    let mut timers = ActionTimers::default();

    assert!(state.try_dodge(&tuning).is_some());
    timers.arm(TimerPurpose::DodgeEnd, tuning.dodge_duration);
    assert!(state.dodging);
    assert!(state.has_recently_dodged);
    assert_eq!(state.damage_multiplier, 2.0);

    // Dodge animation window elapses
    for purpose in timers.tick(1.5) {
        apply_expiry(purpose, &mut state, &mut timers, &tuning);
    }
    assert!(!state.dodging);
    assert!(state.has_recently_dodged);
    assert_eq!(state.damage_multiplier, 2.0, "advantage outlives the dodge");
    assert!(timers.is_pending(TimerPurpose::DodgeAdvantageEnd));

    // Advantage window elapses
    for purpose in timers.tick(1.0) {
        apply_expiry(purpose, &mut state, &mut timers, &tuning);
    }
    assert!(!state.has_recently_dodged);
    assert_eq!(state.damage_multiplier, 1.0);
}

#[test]
fn test_advantage_end_clears_deferred_attack_lock() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    let mut timers = ActionTimers::default();

    state.try_dodge(&tuning).unwrap();
    timers.arm(TimerPurpose::DodgeEnd, tuning.dodge_duration);
    for purpose in timers.tick(1.5) {
        apply_expiry(purpose, &mut state, &mut timers, &tuning);
    }

    // Punch lands inside the advantage window; its recover timer is
    // deferred to the dodge chain
    assert!(state.defers_attack_recovery());
    state.try_punch(0.0, &tuning).unwrap();
    assert!(state.punching);

    for purpose in timers.tick(1.0) {
        apply_expiry(purpose, &mut state, &mut timers, &tuning);
    }
    assert!(!state.punching);
    assert!(!state.left_side_attack);
    assert!(state.upper_body_slot);
}

// -----------------------------------------------------------------------------
// Action timers
// -----------------------------------------------------------------------------

#[test]
fn test_timer_fires_once_after_delay() {
    let mut timers = ActionTimers::default();
    timers.arm(TimerPurpose::PunchRecover, 0.5);
    assert!(timers.tick(0.3).is_empty());
    assert_eq!(timers.tick(0.3), vec![TimerPurpose::PunchRecover]);
    assert!(timers.tick(10.0).is_empty());
    assert!(!timers.is_pending(TimerPurpose::PunchRecover));
}

#[test]
fn test_rearming_resets_countdown() {
    let mut timers = ActionTimers::default();
    timers.arm(TimerPurpose::KickRecover, 1.1);
    timers.tick(1.0);
    // Rearm just before expiry: only the fresh countdown ever fires
    timers.arm(TimerPurpose::KickRecover, 1.1);
    assert_eq!(timers.remaining(TimerPurpose::KickRecover), Some(1.1));
    assert!(timers.tick(0.2).is_empty());
    assert!(timers.is_pending(TimerPurpose::KickRecover));
    assert_eq!(timers.tick(1.0), vec![TimerPurpose::KickRecover]);
}

#[test]
fn test_independent_purposes_coexist() {
    let mut timers = ActionTimers::default();
    timers.arm(TimerPurpose::SprintPulse, 0.5);
    timers.arm(TimerPurpose::DodgeEnd, 1.5);
    assert_eq!(timers.tick(0.6), vec![TimerPurpose::SprintPulse]);
    assert!(timers.is_pending(TimerPurpose::DodgeEnd));
    assert_eq!(timers.tick(1.0), vec![TimerPurpose::DodgeEnd]);
}

#[test]
fn test_kick_recover_expiry_clears_lockout() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    let mut timers = ActionTimers::default();

    state.try_kick(0.0, &tuning).unwrap();
    assert!(!state.upper_body_slot);
    apply_expiry(TimerPurpose::KickRecover, &mut state, &mut timers, &tuning);
    assert!(!state.kicking);
    assert!(state.upper_body_slot);
    assert!(!state.left_side_attack);
}

#[test]
fn test_pivot_reset_restores_upper_slot() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    let mut timers = ActionTimers::default();
    state.upper_body_slot = false;
    apply_expiry(TimerPurpose::PivotReset, &mut state, &mut timers, &tuning);
    assert!(state.upper_body_slot);
}

// -----------------------------------------------------------------------------
// Hit-detection inputs
// -----------------------------------------------------------------------------

#[test]
fn test_scaled_damage_includes_advantage_multiplier() {
    let tuning = CombatTuning::default();
    let mut state = armed_state();
    state.try_dodge(&tuning).unwrap();
    // Dodge window passes; attack during the advantage window
    let mut timers = ActionTimers::default();
    apply_expiry(TimerPurpose::DodgeEnd, &mut state, &mut timers, &tuning);
    state.try_punch(-0.2, &tuning).unwrap();
    assert_eq!(state.pending_damage, 10.0);
    assert_eq!(state.scaled_damage(), 20.0);
}
