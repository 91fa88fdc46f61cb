//! Round evaluation engine — pure logic (no rendering / IO).
//!
//! The engine is stateless: `evaluate` consumes an allocation, a scenario,
//! and the running asset total, and produces a `RoundOutcome`. The caller
//! owns the game state and folds the outcome in after each round.

use crate::state::{Allocation, RoundOutcome, Scenario, StockId, STOCK_COUNT};

// ── Normalization ──────────────────────────────────────────────────────

/// Convert raw relative weights into percentages summing to 100.
///
/// If every weight is 0 the divisor is substituted with 1, so every output
/// is 0. That is a defined degenerate-input policy (the original game's
/// behavior, preserved), not an equal split and not an error.
pub fn normalize(weights: &[f64; STOCK_COUNT]) -> [f64; STOCK_COUNT] {
    let total: f64 = weights.iter().sum();
    let safe_total = if total == 0.0 { 1.0 } else { total };
    let mut out = [0.0; STOCK_COUNT];
    for i in 0..STOCK_COUNT {
        out[i] = weights[i] / safe_total * 100.0;
    }
    out
}

// ── Return blending ────────────────────────────────────────────────────

/// Fractional total return for one round (0.037 = +3.7%).
///
/// Stock and cash fractions sum to 1 by `Allocation` construction; the
/// engine does not re-validate that here.
pub fn blend_return(alloc: &Allocation, scenario: &Scenario) -> f64 {
    let stock_fraction = alloc.stock_ratio() / 100.0;
    let cash_fraction = alloc.cash_ratio() / 100.0;

    let normalized = normalize(alloc.weights());
    let weighted_stock_return: f64 = normalized
        .iter()
        .zip(scenario.stock_returns.iter())
        .map(|(share, ret)| share / 100.0 * ret)
        .sum();

    stock_fraction * weighted_stock_return + cash_fraction * scenario.cash_return
}

// ── Settlement ─────────────────────────────────────────────────────────

/// Apply a total return to the asset balance.
///
/// Truncation toward negative infinity on the combined value: a round that
/// nets a tiny negative fraction still loses a whole won. The original
/// game settles this way and the asymmetry is preserved as-is.
pub fn settle(assets_before: u64, total_return: f64) -> (f64, u64) {
    let profit = assets_before as f64 * total_return;
    let after = (assets_before as f64 + profit).floor().max(0.0) as u64;
    (profit, after)
}

// ── Satisfaction scoring ───────────────────────────────────────────────

const COMMENT_EXCELLENT: &str =
    "수익률이 아주 예술이야. 자네가 사고 싶다던 그 차, 오늘 계약하러 가게.";
const COMMENT_MODEST: &str = "소소하구먼. 오늘 점심은 가볍게 스테이크 정도로 하지.";
const COMMENT_SMALL_LOSS: &str =
    "오늘 내 커피 한 잔 값이 사라졌군. 자네, 내일은 스테이크 값을 벌어와야 할 거야.";
const COMMENT_BIG_LOSS: &str =
    "자네, 사막의 밤이 왜 무서운지 아나? 지금 내 기분이 딱 그렇군.";

/// Stage-1 baseline: first matching `>=` band wins, top-down. Boundaries
/// resolve to the higher tier (exactly 0 → the 75 band).
struct Tier {
    min_percent: f64,
    satisfaction: i32,
    comment: &'static str,
}

const TIERS: [Tier; 4] = [
    Tier {
        min_percent: 5.0,
        satisfaction: 95,
        comment: COMMENT_EXCELLENT,
    },
    Tier {
        min_percent: 0.0,
        satisfaction: 75,
        comment: COMMENT_MODEST,
    },
    Tier {
        min_percent: -5.0,
        satisfaction: 50,
        comment: COMMENT_SMALL_LOSS,
    },
    Tier {
        min_percent: f64::NEG_INFINITY,
        satisfaction: 20,
        comment: COMMENT_BIG_LOSS,
    },
];

fn baseline(profit_percent: f64) -> (i32, &'static str) {
    for tier in &TIERS {
        if profit_percent >= tier.min_percent {
            return (tier.satisfaction, tier.comment);
        }
    }
    // The last tier's bound is -inf, so a finite profit always matches.
    (20, COMMENT_BIG_LOSS)
}

/// Condition on the player's stock ratio.
enum RatioCond {
    Above(f64),
    Below(f64),
}

impl RatioCond {
    fn matches(&self, stock_ratio: f64) -> bool {
        match *self {
            RatioCond::Above(t) => stock_ratio > t,
            RatioCond::Below(t) => stock_ratio < t,
        }
    }
}

/// Effect applied when a posture guard fires.
enum GuardEffect {
    /// Cap satisfaction at this ceiling.
    ClampTo(i32),
    /// Subtract this amount, floored at 0.
    Penalize(i32),
}

/// Bonus for overweighting the round's key stocks. Only fires on a
/// profitable round; worth +5, capped at 100.
struct FocusBonus {
    stocks: &'static [StockId],
    /// Normalized share threshold (strict `>`), in percent.
    min_share: f64,
    comment: &'static str,
}

/// Reaction to a reckless stock/cash posture for the round.
struct PostureGuard {
    cond: RatioCond,
    effect: GuardEffect,
    comment: &'static str,
}

/// Stage-2 adjustment for one scenario. Bonus is checked before the
/// guard and the two branches are mutually exclusive.
struct ScenarioRule {
    round_id: u32,
    bonus: Option<FocusBonus>,
    guard: Option<PostureGuard>,
}

const FOCUS_BONUS_POINTS: i32 = 5;

/// Adding a fifth scenario is a catalog entry plus a row here; the
/// scoring code itself never branches on round ids.
const SCENARIO_RULES: [ScenarioRule; 4] = [
    // Rate hike: punish going nearly all-in on stocks.
    ScenarioRule {
        round_id: 1,
        bonus: None,
        guard: Some(PostureGuard {
            cond: RatioCond::Above(90.0),
            effect: GuardEffect::ClampTo(30),
            comment: COMMENT_BIG_LOSS,
        }),
    },
    // AI rally: reward riding the Nvidia wave, scold the timid.
    ScenarioRule {
        round_id: 2,
        bonus: Some(FocusBonus {
            stocks: &[StockId::Nvidia],
            min_share: 20.0,
            comment: "AI 대장주를 낚아채는 솜씨가 아주 예술이야. 자네가 사고 싶다던 그 차, 오늘 계약하러 가게.",
        }),
        guard: Some(PostureGuard {
            cond: RatioCond::Below(50.0),
            effect: GuardEffect::Penalize(10),
            comment: "시장이 이렇게 불타는데 겨우 커피값이나 벌어오다니... 자네, 사막의 밤이 왜 무서운지 아나?",
        }),
    },
    // Geopolitical shock: reward the defense hedge, punish overexposure.
    ScenarioRule {
        round_id: 3,
        bonus: Some(FocusBonus {
            stocks: &[StockId::Hanwha],
            min_share: 20.0,
            comment: "방산주로 리스크를 예술적으로 방어했군! 오늘 당장 차 계약하러 가게나.",
        }),
        guard: Some(PostureGuard {
            cond: RatioCond::Above(80.0),
            effect: GuardEffect::ClampTo(20),
            comment: "사막의 한가운데서 나침반을 잃어버린 기분이야. 내 자산이 장난인가?",
        }),
    },
    // Pandemic rebound: reward bio/untact picks, scold the over-cautious.
    ScenarioRule {
        round_id: 4,
        bonus: Some(FocusBonus {
            stocks: &[StockId::Celltrion, StockId::Naver],
            min_share: 15.0,
            comment: "포트폴리오 구성이 아주 예술이야! 오늘 당장 그 차 계약하러 가게.",
        }),
        guard: Some(PostureGuard {
            cond: RatioCond::Below(30.0),
            effect: GuardEffect::Penalize(10),
            comment: "반등 기회에 커피값이나 벌고 있다니... 지금 내 기분은 사막의 밤보다 더 차갑군.",
        }),
    },
];

fn scenario_rule(round_id: u32) -> Option<&'static ScenarioRule> {
    SCENARIO_RULES.iter().find(|r| r.round_id == round_id)
}

/// Two-stage satisfaction scoring: profit-tier baseline, then the
/// scenario's table-driven adjustment, then a final unconditional clamp
/// to 0..=100.
pub fn score(
    profit_percent: f64,
    stock_ratio: f64,
    normalized: &[f64; STOCK_COUNT],
    round_id: u32,
) -> (u32, &'static str) {
    let (mut satisfaction, mut comment) = baseline(profit_percent);

    if let Some(rule) = scenario_rule(round_id) {
        match &rule.bonus {
            // Bonus and guard are mutually exclusive; bonus wins.
            Some(b)
                if profit_percent > 0.0
                    && b.stocks.iter().any(|s| normalized[s.index()] > b.min_share) =>
            {
                satisfaction = (satisfaction + FOCUS_BONUS_POINTS).min(100);
                comment = b.comment;
            }
            _ => {
                if let Some(g) = &rule.guard {
                    if g.cond.matches(stock_ratio) {
                        satisfaction = match g.effect {
                            GuardEffect::ClampTo(ceiling) => satisfaction.min(ceiling),
                            GuardEffect::Penalize(points) => (satisfaction - points).max(0),
                        };
                        comment = g.comment;
                    }
                }
            }
        }
    }

    (satisfaction.clamp(0, 100) as u32, comment)
}

// ── Round evaluation ───────────────────────────────────────────────────

/// Round a percentage to 2 decimal places for display and history.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Evaluate one round. Pure and deterministic: the same inputs always
/// produce the same outcome.
pub fn evaluate(alloc: &Allocation, scenario: &Scenario, assets_before: u64) -> RoundOutcome {
    let total_return = blend_return(alloc, scenario);
    let profit_percent = total_return * 100.0;
    let (_profit, assets_after) = settle(assets_before, total_return);
    let normalized = normalize(alloc.weights());
    let (satisfaction, comment) = score(
        profit_percent,
        alloc.stock_ratio(),
        &normalized,
        scenario.id,
    );

    RoundOutcome {
        round_id: scenario.id,
        profit_rate: round2(profit_percent),
        assets_after,
        satisfaction,
        comment,
    }
}

// ── Ending summary ─────────────────────────────────────────────────────

/// Average satisfaction over the game, rounded to the nearest integer.
pub fn average_score(total: u32, rounds: u32) -> u32 {
    if rounds == 0 {
        0
    } else {
        (total as f64 / rounds as f64).round() as u32
    }
}

/// Closing narrative for the performance report, by average score.
pub fn final_comment(average: u32) -> &'static str {
    if average >= 80 {
        "자네 정말 수고했네! 이번에 보여준 근거 있는 판단만큼, 다음에도 이런 근거 있는 선택을 기대하겠네."
    } else if average >= 60 {
        "수익은 어느 정도 거두었군. 시장 흐름에 잘 대응했지만, 좀 더 공격적인 운용 전략이 있었다면 하는 아쉬움이 있네."
    } else if average >= 40 {
        "PB님, 제 자산이 장난입니까? 실험은 삼가시죠. 좀 더 신중하게 하게."
    } else {
        "실망이 크네... 자네는 PB의 기본인 '리스크 관리'부터 다시 공부하고 오게나."
    }
}

// ── Formatting ─────────────────────────────────────────────────────────

/// Format a won amount at the 억 (1e8) scale: `1,000억`.
pub fn format_won(value: u64) -> String {
    format!("{}억", group_digits(value as i64 / 100_000_000))
}

/// Signed 억-scale delta between two balances: `+37억` / `-2억`.
/// Floor division matches the original's display of negative deltas.
pub fn format_won_diff(after: u64, before: u64) -> String {
    let diff = after as i64 - before as i64;
    let uk = diff.div_euclid(100_000_000);
    if uk > 0 {
        format!("+{}억", group_digits(uk))
    } else {
        format!("{}억", group_digits(uk))
    }
}

fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{scenario, INITIAL_ASSETS};

    fn alloc(stock_ratio: f64, weights: [f64; STOCK_COUNT]) -> Allocation {
        Allocation::new(stock_ratio, weights).unwrap()
    }

    // ── Normalization ─────────────────────────────────────────

    #[test]
    fn normalize_sums_to_100() {
        let n = normalize(&[20.0, 15.0, 15.0, 10.0, 20.0, 20.0]);
        let sum: f64 = n.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_all_zero_stays_zero() {
        // Defined degenerate case: divisor becomes 1, every share is 0.
        // The sum is 0 here, not 100.
        let n = normalize(&[0.0; STOCK_COUNT]);
        assert_eq!(n, [0.0; STOCK_COUNT]);
    }

    #[test]
    fn normalize_single_nonzero_takes_all() {
        let mut w = [0.0; STOCK_COUNT];
        w[StockId::Nvidia.index()] = 3.0;
        let n = normalize(&w);
        assert!((n[StockId::Nvidia.index()] - 100.0).abs() < 1e-9);
        assert_eq!(n[StockId::Samsung.index()], 0.0);
    }

    // ── Blending ──────────────────────────────────────────────

    #[test]
    fn blend_all_cash_is_cash_return() {
        let s = scenario(1).unwrap();
        let a = alloc(0.0, [10.0; STOCK_COUNT]);
        assert!((blend_return(&a, s) - s.cash_return).abs() < 1e-12);
    }

    #[test]
    fn blend_all_stock_single_weight_is_that_return() {
        let s = scenario(2).unwrap();
        let mut w = [0.0; STOCK_COUNT];
        w[StockId::Nvidia.index()] = 40.0;
        let a = alloc(100.0, w);
        let expected = s.stock_returns[StockId::Nvidia.index()];
        assert!((blend_return(&a, s) - expected).abs() < 1e-12);
    }

    #[test]
    fn blend_is_linear_in_stock_fraction() {
        let s = scenario(3).unwrap();
        let w = [20.0, 15.0, 15.0, 10.0, 20.0, 20.0];
        let r0 = blend_return(&alloc(0.0, w), s);
        let r100 = blend_return(&alloc(100.0, w), s);
        let r60 = blend_return(&alloc(60.0, w), s);
        let interpolated = r0 + 0.6 * (r100 - r0);
        assert!((r60 - interpolated).abs() < 1e-12);
    }

    #[test]
    fn blend_is_scale_invariant_in_weights() {
        let s = scenario(4).unwrap();
        let w = [20.0, 15.0, 15.0, 10.0, 20.0, 20.0];
        let scaled = w.map(|x| x * 7.5);
        let a = blend_return(&alloc(70.0, w), s);
        let b = blend_return(&alloc(70.0, scaled), s);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn blend_zero_weights_contribute_nothing() {
        let s = scenario(2).unwrap();
        let a = alloc(80.0, [0.0; STOCK_COUNT]);
        // Stock portion earns 0; only the cash fraction pays.
        let expected = 0.2 * s.cash_return;
        assert!((blend_return(&a, s) - expected).abs() < 1e-12);
    }

    // ── Settlement ────────────────────────────────────────────

    #[test]
    fn settle_truncates_toward_negative_infinity() {
        let (_, after) = settle(INITIAL_ASSETS, -0.000_000_005);
        assert_eq!(after, 99_999_999_500);
    }

    #[test]
    fn settle_fractional_loss_costs_a_whole_won() {
        let (profit, after) = settle(1000, -0.0001);
        assert!(profit < 0.0);
        assert_eq!(after, 999);
    }

    #[test]
    fn settle_zero_return_is_identity() {
        assert_eq!(settle(12_345, 0.0).1, 12_345);
    }

    #[test]
    fn settle_positive_gain_floors() {
        // 1000 * 1.0155 = 1015.5 → 1015
        assert_eq!(settle(1000, 0.0155).1, 1015);
    }

    // ── Scoring: baseline tiers ───────────────────────────────

    #[test]
    fn tier_boundaries_resolve_upward() {
        let n = normalize(&[10.0; STOCK_COUNT]);
        // round_id 0 has no rule: baseline only.
        assert_eq!(score(5.0, 50.0, &n, 0).0, 95);
        assert_eq!(score(0.0, 50.0, &n, 0).0, 75);
        assert_eq!(score(-5.0, 50.0, &n, 0).0, 50);
        assert_eq!(score(-5.01, 50.0, &n, 0).0, 20);
    }

    #[test]
    fn zero_profit_gets_modest_comment() {
        let n = normalize(&[10.0; STOCK_COUNT]);
        let (sat, comment) = score(0.0, 50.0, &n, 0);
        assert_eq!(sat, 75);
        assert_eq!(comment, COMMENT_MODEST);
    }

    #[test]
    fn each_tier_has_a_distinct_comment() {
        let mut comments: Vec<&str> = TIERS.iter().map(|t| t.comment).collect();
        comments.dedup();
        assert_eq!(comments.len(), 4);
    }

    // ── Scoring: scenario adjustments ─────────────────────────

    #[test]
    fn rate_hike_overweight_clamps_to_30() {
        let n = normalize(&[10.0; STOCK_COUNT]);
        // Even a great profit tier is capped when stock ratio > 90.
        let (sat, comment) = score(6.0, 95.0, &n, 1);
        assert_eq!(sat, 30);
        assert_eq!(comment, COMMENT_BIG_LOSS);
        // At exactly 90 the guard does not fire.
        assert_eq!(score(6.0, 90.0, &n, 1).0, 95);
    }

    #[test]
    fn ai_rally_nvidia_bonus_caps_at_100() {
        let mut w = [14.0; STOCK_COUNT];
        w[StockId::Nvidia.index()] = 30.0;
        let n = normalize(&w);
        assert!(n[StockId::Nvidia.index()] > 20.0);
        // Baseline 95 + 5 bonus must clamp to exactly 100.
        let (sat, _) = score(6.0, 80.0, &n, 2);
        assert_eq!(sat, 100);
    }

    #[test]
    fn ai_rally_bonus_needs_positive_profit() {
        let mut w = [14.0; STOCK_COUNT];
        w[StockId::Nvidia.index()] = 30.0;
        let n = normalize(&w);
        // Nvidia-heavy but losing round: no bonus, and with ratio >= 50
        // no scolding either. Baseline stands.
        assert_eq!(score(-1.0, 80.0, &n, 2).0, 50);
    }

    #[test]
    fn ai_rally_timid_gets_scolded() {
        let n = normalize(&[10.0; STOCK_COUNT]);
        // Equal weights: Nvidia share is ~16.7%, below the 20% focus bar.
        let (sat, comment) = score(1.0, 30.0, &n, 2);
        assert_eq!(sat, 65);
        assert!(comment.contains("커피값"));
    }

    #[test]
    fn geopolitics_hanwha_hedge_gets_bonus() {
        let mut w = [10.0; STOCK_COUNT];
        w[StockId::Hanwha.index()] = 30.0;
        let n = normalize(&w);
        let (sat, comment) = score(1.0, 60.0, &n, 3);
        assert_eq!(sat, 80);
        assert!(comment.contains("방산주"));
    }

    #[test]
    fn geopolitics_overexposure_clamps_to_20() {
        let n = normalize(&[10.0; STOCK_COUNT]);
        let (sat, _) = score(1.0, 85.0, &n, 3);
        assert_eq!(sat, 20);
    }

    #[test]
    fn pandemic_bonus_fires_on_either_stock() {
        let mut naver_heavy = [10.0; STOCK_COUNT];
        naver_heavy[StockId::Naver.index()] = 30.0;
        let n = normalize(&naver_heavy);
        assert_eq!(score(2.0, 60.0, &n, 4).0, 80);

        let mut celltrion_heavy = [10.0; STOCK_COUNT];
        celltrion_heavy[StockId::Celltrion.index()] = 30.0;
        let n = normalize(&celltrion_heavy);
        assert_eq!(score(2.0, 60.0, &n, 4).0, 80);
    }

    #[test]
    fn pandemic_over_cautious_penalized() {
        // Equal weights put both Celltrion and Naver at ~16.7% > 15%, so
        // use a spread that keeps them under the focus bar.
        let w = [30.0, 10.0, 10.0, 10.0, 30.0, 10.0];
        let n = normalize(&w);
        assert!(n[StockId::Naver.index()] < 15.0);
        assert!(n[StockId::Celltrion.index()] < 15.0);
        let (sat, comment) = score(0.5, 20.0, &n, 4);
        assert_eq!(sat, 65);
        assert!(comment.contains("반등"));
    }

    #[test]
    fn penalty_applies_on_top_of_bad_tier() {
        // Low baseline (20) plus the -10 penalty, still within 0..=100.
        let w = [30.0, 10.0, 10.0, 10.0, 30.0, 10.0];
        let n = normalize(&w);
        let (sat, _) = score(-10.0, 20.0, &n, 4);
        assert_eq!(sat, 10);
    }

    #[test]
    fn unknown_round_gets_no_adjustment() {
        let n = normalize(&[10.0; STOCK_COUNT]);
        assert_eq!(score(6.0, 95.0, &n, 7).0, 95);
    }

    // ── evaluate ──────────────────────────────────────────────

    #[test]
    fn evaluate_round1_defensive_play() {
        // 50/50 split, equal weights. Weighted stock return for round 1 is
        // (-0.05-0.15-0.05-0.02-0.20-0.15)/6 = -0.1033…; total return is
        // 0.5*(-0.1033) + 0.5*0.04 = -0.031666…
        let s = scenario(1).unwrap();
        let a = alloc(50.0, [10.0; STOCK_COUNT]);
        let out = evaluate(&a, s, INITIAL_ASSETS);
        assert_eq!(out.round_id, 1);
        assert_eq!(out.profit_rate, -3.17);
        assert_eq!(out.satisfaction, 50);
        assert!(out.assets_after < INITIAL_ASSETS);
    }

    #[test]
    fn evaluate_round1_reckless_play_feared() {
        let s = scenario(1).unwrap();
        let a = alloc(95.0, [10.0; STOCK_COUNT]);
        let out = evaluate(&a, s, INITIAL_ASSETS);
        assert!(out.satisfaction <= 30);
        assert_eq!(out.comment, COMMENT_BIG_LOSS);
    }

    #[test]
    fn evaluate_round2_nvidia_rider_praised() {
        let s = scenario(2).unwrap();
        let mut w = [14.0; STOCK_COUNT];
        w[StockId::Nvidia.index()] = 30.0;
        let a = alloc(80.0, w);
        let out = evaluate(&a, s, INITIAL_ASSETS);
        assert!(out.profit_rate > 0.0);
        assert_eq!(out.satisfaction, 100);
        assert!(out.comment.contains("AI"));
    }

    #[test]
    fn evaluate_is_deterministic() {
        let s = scenario(3).unwrap();
        let a = alloc(60.0, [20.0, 15.0, 15.0, 10.0, 20.0, 20.0]);
        let x = evaluate(&a, s, 77_777_777_777);
        let y = evaluate(&a, s, 77_777_777_777);
        assert_eq!(x, y);
    }

    #[test]
    fn evaluate_all_zero_weights_is_defined() {
        // All sliders at zero: the stock portion earns nothing, cash pays.
        let s = scenario(1).unwrap();
        let a = alloc(70.0, [0.0; STOCK_COUNT]);
        let out = evaluate(&a, s, INITIAL_ASSETS);
        assert_eq!(out.profit_rate, 1.2); // 0.3 * 4%
        assert_eq!(out.satisfaction, 75);
    }

    // ── Ending summary ────────────────────────────────────────

    #[test]
    fn average_score_rounds_to_nearest() {
        assert_eq!(average_score(300, 4), 75);
        assert_eq!(average_score(301, 4), 75); // 75.25
        assert_eq!(average_score(302, 4), 76); // 75.5 rounds away from zero
        assert_eq!(average_score(0, 0), 0);
    }

    #[test]
    fn final_comment_bands() {
        assert!(final_comment(80).contains("수고했네"));
        assert!(final_comment(60).contains("아쉬움"));
        assert!(final_comment(40).contains("신중"));
        assert!(final_comment(39).contains("리스크 관리"));
    }

    // ── Formatting ────────────────────────────────────────────

    #[test]
    fn format_won_floors_to_uk() {
        assert_eq!(format_won(100_000_000_000), "1,000억");
        assert_eq!(format_won(99_999_999_999), "999억");
        assert_eq!(format_won(0), "0억");
    }

    #[test]
    fn format_won_diff_is_signed() {
        assert_eq!(format_won_diff(103_700_000_000, 100_000_000_000), "+37억");
        assert_eq!(format_won_diff(100_000_000_000, 100_000_000_000), "0억");
        // Floor division: a 1.5억 loss displays as -2억.
        assert_eq!(format_won_diff(99_850_000_000, 100_000_000_000), "-2억");
    }
}
