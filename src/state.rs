//! PB simulation — data model, scenario catalog, and screen state.

use serde::Serialize;
use thiserror::Error;

/// Number of tradable stocks. The set is closed; no dynamic instruments.
pub const STOCK_COUNT: usize = 6;

/// Rounds in one full game.
pub const TOTAL_ROUNDS: u32 = 4;

/// Starting assets under management: 1000억 KRW.
pub const INITIAL_ASSETS: u64 = 100_000_000_000;

/// Slider granularity for ratio and weight adjustments.
pub const SLIDER_STEP: u32 = 5;

// ── Stocks ─────────────────────────────────────────────────────────────

/// The six tradable instruments, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockId {
    Samsung,
    Naver,
    Celltrion,
    Hanwha,
    Tesla,
    Nvidia,
}

/// All stocks in display order.
pub const ALL_STOCKS: [StockId; STOCK_COUNT] = [
    StockId::Samsung,
    StockId::Naver,
    StockId::Celltrion,
    StockId::Hanwha,
    StockId::Tesla,
    StockId::Nvidia,
];

impl StockId {
    /// Position in per-stock tables (`[T; STOCK_COUNT]`).
    pub fn index(self) -> usize {
        match self {
            StockId::Samsung => 0,
            StockId::Naver => 1,
            StockId::Celltrion => 2,
            StockId::Hanwha => 3,
            StockId::Tesla => 4,
            StockId::Nvidia => 5,
        }
    }
}

/// Static display info about a stock.
pub struct StockInfo {
    pub name: &'static str,
    pub sector: &'static str,
}

pub fn stock_info(id: StockId) -> StockInfo {
    match id {
        StockId::Samsung => StockInfo {
            name: "삼성전자",
            sector: "반도체",
        },
        StockId::Naver => StockInfo {
            name: "네이버",
            sector: "IT/플랫폼",
        },
        StockId::Celltrion => StockInfo {
            name: "셀트리온",
            sector: "바이오",
        },
        StockId::Hanwha => StockInfo {
            name: "한화에어로스페이스",
            sector: "방산/항공우주",
        },
        StockId::Tesla => StockInfo {
            name: "테슬라",
            sector: "전기차",
        },
        StockId::Nvidia => StockInfo {
            name: "엔비디아",
            sector: "AI 반도체",
        },
    }
}

// ── Scenario catalog ───────────────────────────────────────────────────

/// One round's fixed market condition. Constructed once, never mutated.
pub struct Scenario {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
    pub hint: &'static str,
    /// Return rate on the cash portion (0.04 = +4%).
    pub cash_return: f64,
    /// Return rate per stock, indexed by `StockId::index()`.
    pub stock_returns: [f64; STOCK_COUNT],
}

/// The four rounds, in play order. `stock_returns` order:
/// Samsung, Naver, Celltrion, Hanwha, Tesla, Nvidia.
pub const SCENARIOS: [Scenario; TOTAL_ROUNDS as usize] = [
    Scenario {
        id: 1,
        title: "ROUND 1. 글로벌 금리 인상기",
        description: "속보가 이어진다.\n\"기준금리 추가 인상.\"\n\n물가는 쉽게 잡히지 않고,\n중앙은행은 강한 긴축을 예고한다.",
        bullets: &[
            "증시는 방향을 잡지 못한 채 흔들린다.",
            "낙관과 불안이 하루 만에 뒤바뀐다.",
            "지금이 조정의 구간인지, 하락의 시작인지, 판단은 PB의 몫입니다.",
        ],
        hint: "변동성이 큰 시기에는 현금을 든든한 방패로 챙겨두는 게 어떨까요? 40~60% 정도의 방어적인 배분이 유리할 수도 있어요.",
        cash_return: 0.04,
        stock_returns: [-0.05, -0.15, -0.05, -0.02, -0.20, -0.15],
    },
    Scenario {
        id: 2,
        title: "ROUND 2. AI 수요 폭발 & 기술주 랠리",
        description: "대형 IT 기업이 예상 밖의 실적을 발표한다.\nAI 산업에 자금이 몰린다.\n\n\"이번에는 다르다\"는 말이 반복된다.",
        bullets: &[
            "주가는 연일 신고가를 경신하고, 시장에는 낙관이 가득하다.",
            "\"이번에는 다르다\"는 말이 반복된다.",
            "지금이 거대한 기회의 시작인지, 과열의 정점인지, 판단은 PB의 몫입니다.",
        ],
        hint: "시장의 뜨거운 열기에 올라타 보는 건 어떨까요? 70~90% 정도 과감하게 주식을 담아봐도 좋을 시기예요.",
        cash_return: 0.02,
        stock_returns: [0.08, 0.05, 0.01, 0.03, 0.12, 0.30],
    },
    Scenario {
        id: 3,
        title: "ROUND 3. 지정학적 리스크 (전쟁 발발)",
        description: "새벽 긴급 뉴스가 전해진다.\n특정 지역에서 무력 충돌이 발생했다.\n\n원자재 가격과 환율이 급등하고,\n증시는 개장과 동시에 급락한다.",
        bullets: &[
            "원자재 가격과 환율이 급등하고, 증시는 개장과 동시에 급락한다.",
            "공포는 빠르게 확산된다.",
            "방산 섹터에 대한 시장의 관심이 급증합니다.",
        ],
        hint: "갑작스러운 공포에는 현금으로 방어막(50~70%)을 치거나, 위기에 강한 섹터를 선점하는 전략이 필요합니다.",
        cash_return: 0.01,
        stock_returns: [-0.10, -0.12, -0.05, 0.25, -0.15, -0.12],
    },
    Scenario {
        id: 4,
        title: "ROUND 4. 글로벌 팬데믹",
        description: "감염병이 전 세계로 확산된다.\n도시는 멈추고, 시장은 크게 흔들린다.\n\n시간이 흐르며 각국은 전례 없는 대응책을 내놓는다.\n증시는 급락과 반등을 반복한다.",
        bullets: &[
            "시간이 흐르며 각국은 전례 없는 대응책을 내놓는다. 증시는 급락과 반등을 반복한다.",
            "지금이 기회인지, 또 한 번의 함정인지, 판단은 PB의 몫입니다.",
        ],
        hint: "위기 속에서도 침착하게 60% 정도의 주식 비중을 가져가면 어떨까요? 멀리 내다보는 혜안이 필요한 때예요.",
        cash_return: 0.01,
        stock_returns: [0.05, 0.20, 0.25, -0.10, 0.15, 0.10],
    },
];

/// Look up a round's scenario by its 1-based id.
pub fn scenario(round: u32) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == round)
}

// ── Allocation ─────────────────────────────────────────────────────────

/// Engine precondition violations. These indicate a bug in the calling
/// layer, not a valid game state, and are never silently coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("stock ratio must be a finite value in 0..=100, got {value}")]
    StockRatioOutOfRange { value: f64 },
    #[error("weight for {stock:?} must be finite and non-negative, got {value}")]
    InvalidWeight { stock: StockId, value: f64 },
}

/// A validated allocation decision for one round.
///
/// The cash ratio is derived (`100 - stock_ratio`), never stored, so the
/// two portions sum to 100 by construction. Raw stock weights are relative
/// slider values and need not sum to anything.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    stock_ratio: f64,
    weights: [f64; STOCK_COUNT],
}

impl Allocation {
    pub fn new(stock_ratio: f64, weights: [f64; STOCK_COUNT]) -> Result<Self, EngineError> {
        if !stock_ratio.is_finite() || !(0.0..=100.0).contains(&stock_ratio) {
            return Err(EngineError::StockRatioOutOfRange { value: stock_ratio });
        }
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(EngineError::InvalidWeight {
                    stock: ALL_STOCKS[i],
                    value: w,
                });
            }
        }
        Ok(Self {
            stock_ratio,
            weights,
        })
    }

    pub fn stock_ratio(&self) -> f64 {
        self.stock_ratio
    }

    pub fn cash_ratio(&self) -> f64 {
        100.0 - self.stock_ratio
    }

    pub fn weights(&self) -> &[f64; STOCK_COUNT] {
        &self.weights
    }
}

// ── Round outcome ──────────────────────────────────────────────────────

/// Result of evaluating one round. Created once by the engine, appended
/// to the history, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundOutcome {
    pub round_id: u32,
    /// Total return in percent, rounded to 2 decimal places.
    pub profit_rate: f64,
    pub assets_after: u64,
    /// Client satisfaction, 0..=100.
    pub satisfaction: u32,
    pub comment: &'static str,
}

// ── Clients ────────────────────────────────────────────────────────────

/// Selectable VIP persona. Pure flavor; does not affect scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientKind {
    Wealthy,
    SportStar,
    Ceo,
    Idol,
}

pub const ALL_CLIENTS: [ClientKind; 4] = [
    ClientKind::Wealthy,
    ClientKind::SportStar,
    ClientKind::Ceo,
    ClientKind::Idol,
];

impl ClientKind {
    pub fn name(self) -> &'static str {
        match self {
            ClientKind::Wealthy => "자산가",
            ClientKind::SportStar => "스포츠 스타",
            ClientKind::Ceo => "기업가",
            ClientKind::Idol => "아이돌",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            ClientKind::Wealthy => "The Wealthy",
            ClientKind::SportStar => "Sport Star",
            ClientKind::Ceo => "CEO",
            ClientKind::Idol => "Global Idol",
        }
    }
}

/// Client mood derived from a satisfaction score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Angry,
}

impl Mood {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Mood::Happy
        } else if score >= 60 {
            Mood::Neutral
        } else if score >= 40 {
            Mood::Sad
        } else {
            Mood::Angry
        }
    }

    pub fn face(self) -> &'static str {
        match self {
            Mood::Happy => "(^▽^)",
            Mood::Neutral => "(・_・)",
            Mood::Sad => "(´･ω･`)",
            Mood::Angry => "(#`Д´)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "만족",
            Mood::Neutral => "보통",
            Mood::Sad => "불만",
            Mood::Angry => "분노",
        }
    }
}

// ── Screen state ───────────────────────────────────────────────────────

/// Screen state machine:
/// `Intro → {Scenario → AllocMix → AllocStocks → Result} × 4 → Ending`.
/// Every transition is an explicit player confirmation; no timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Intro,
    Scenario,
    AllocMix,
    AllocStocks,
    Result,
    Ending,
}

/// In-progress slider values for the current round's decision.
/// Carried over between rounds, matching the original game's behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    /// Stock portion in percent, 0..=100 in steps of `SLIDER_STEP`.
    pub stock_ratio: u32,
    /// Raw relative weight per stock, 0..=100 each.
    pub weights: [u32; STOCK_COUNT],
    /// Selected slider row on the stock-weights screen.
    pub cursor: usize,
}

impl Draft {
    /// The original game's starting portfolio: stock 70 / cash 30.
    pub fn initial() -> Self {
        Self {
            stock_ratio: 70,
            weights: [20, 15, 15, 10, 20, 20],
            cursor: 0,
        }
    }
}

/// Running game state, owned by the driver layer. The engine itself is
/// stateless; the driver folds each `RoundOutcome` in after evaluation.
pub struct GameState {
    pub step: Step,
    /// Current round, 1-based.
    pub round: u32,
    pub client: ClientKind,
    /// Accumulated satisfaction over completed rounds.
    pub total_score: u32,
    pub assets: u64,
    pub draft: Draft,
    /// Append-only history of completed rounds.
    pub history: Vec<RoundOutcome>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            step: Step::Intro,
            round: 1,
            client: ClientKind::Wealthy,
            total_score: 0,
            assets: INITIAL_ASSETS,
            draft: Draft::initial(),
            history: Vec::new(),
        }
    }

    pub fn current_scenario(&self) -> Option<&'static Scenario> {
        scenario(self.round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let s = GameState::new();
        assert_eq!(s.step, Step::Intro);
        assert_eq!(s.round, 1);
        assert_eq!(s.assets, INITIAL_ASSETS);
        assert_eq!(s.total_score, 0);
        assert!(s.history.is_empty());
        assert_eq!(s.client, ClientKind::Wealthy);
    }

    #[test]
    fn initial_draft_matches_starting_portfolio() {
        let d = Draft::initial();
        assert_eq!(d.stock_ratio, 70);
        assert_eq!(d.weights.iter().sum::<u32>(), 100);
    }

    #[test]
    fn catalog_has_four_ordered_rounds() {
        assert_eq!(SCENARIOS.len(), 4);
        for (i, s) in SCENARIOS.iter().enumerate() {
            assert_eq!(s.id, i as u32 + 1);
            assert!(!s.title.is_empty());
            assert!(!s.hint.is_empty());
            assert!(!s.bullets.is_empty());
        }
    }

    #[test]
    fn scenario_lookup() {
        assert_eq!(scenario(1).map(|s| s.id), Some(1));
        assert_eq!(scenario(4).map(|s| s.id), Some(4));
        assert!(scenario(0).is_none());
        assert!(scenario(5).is_none());
    }

    #[test]
    fn rate_hike_round_favors_cash() {
        let s = scenario(1).unwrap();
        assert!(s.cash_return > 0.0);
        assert!(s.stock_returns.iter().all(|&r| r < 0.0));
    }

    #[test]
    fn stock_index_is_display_order() {
        for (i, &id) in ALL_STOCKS.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn all_stocks_have_info() {
        for &id in &ALL_STOCKS {
            let info = stock_info(id);
            assert!(!info.name.is_empty());
            assert!(!info.sector.is_empty());
        }
    }

    #[test]
    fn allocation_cash_is_derived() {
        let a = Allocation::new(70.0, [1.0; STOCK_COUNT]).unwrap();
        assert_eq!(a.stock_ratio() + a.cash_ratio(), 100.0);
        let b = Allocation::new(0.0, [0.0; STOCK_COUNT]).unwrap();
        assert_eq!(b.cash_ratio(), 100.0);
    }

    #[test]
    fn allocation_rejects_bad_stock_ratio() {
        assert!(matches!(
            Allocation::new(110.0, [1.0; STOCK_COUNT]),
            Err(EngineError::StockRatioOutOfRange { .. })
        ));
        assert!(matches!(
            Allocation::new(-1.0, [1.0; STOCK_COUNT]),
            Err(EngineError::StockRatioOutOfRange { .. })
        ));
        assert!(Allocation::new(f64::NAN, [1.0; STOCK_COUNT]).is_err());
    }

    #[test]
    fn allocation_rejects_negative_weight() {
        let mut w = [10.0; STOCK_COUNT];
        w[StockId::Tesla.index()] = -0.5;
        match Allocation::new(50.0, w) {
            Err(EngineError::InvalidWeight { stock, .. }) => {
                assert_eq!(stock, StockId::Tesla);
            }
            other => panic!("expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn mood_bands() {
        assert_eq!(Mood::from_score(80), Mood::Happy);
        assert_eq!(Mood::from_score(79), Mood::Neutral);
        assert_eq!(Mood::from_score(60), Mood::Neutral);
        assert_eq!(Mood::from_score(59), Mood::Sad);
        assert_eq!(Mood::from_score(40), Mood::Sad);
        assert_eq!(Mood::from_score(39), Mood::Angry);
        assert_eq!(Mood::from_score(0), Mood::Angry);
    }
}
