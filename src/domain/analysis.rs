//! Display-only analysis content.
//!
//! Nothing in here is computed from prices. The panels show fixed tables; the
//! only logic is the signal tally behind the technical verdict and the
//! random alert pick.

use serde::Serialize;
use strum::AsRefStr;

use crate::domain::market_data::Symbol;
use crate::domain::notifications::{NotificationCategory, NotificationDraft, Severity};
use crate::domain::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl Signal {
    pub fn verdict(&self) -> &'static str {
        match self {
            Signal::Buy => "Bullish",
            Signal::Sell => "Bearish",
            Signal::Neutral => "Neutral",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Neutral => "Neutral",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Signal::Buy => {
                "Most indicators point to a bullish setup. Consider entering with a tight stop loss."
            }
            Signal::Sell => {
                "Most indicators point to a bearish setup. Consider reducing exposure or waiting for confirmation."
            }
            Signal::Neutral => {
                "Indicators are mixed. Wait for a clearer confirmation before taking a position."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Indicator {
    pub name: &'static str,
    pub value: f64,
    pub signal: Signal,
    pub description: &'static str,
}

pub const INDICATORS: [Indicator; 6] = [
    Indicator {
        name: "RSI (14)",
        value: 45.2,
        signal: Signal::Neutral,
        description: "Relative Strength Index sits in neutral territory",
    },
    Indicator {
        name: "MACD",
        value: 1.23,
        signal: Signal::Buy,
        description: "MACD line above the signal line, bullish momentum",
    },
    Indicator {
        name: "Bollinger Bands",
        value: 0.85,
        signal: Signal::Buy,
        description: "Price near the lower band, rebound potential",
    },
    Indicator {
        name: "Stochastic",
        value: 25.8,
        signal: Signal::Buy,
        description: "Stochastic oversold, potential buy signal",
    },
    Indicator {
        name: "Williams %R",
        value: -78.5,
        signal: Signal::Buy,
        description: "Williams %R oversold, reversal momentum",
    },
    Indicator {
        name: "Moving Average (20)",
        value: 52_450.30,
        signal: Signal::Sell,
        description: "Price below MA20, short-term bearish trend",
    },
];

pub const SUPPORT_LEVELS: [f64; 3] = [51_200.0, 50_800.0, 50_400.0];
pub const RESISTANCE_LEVELS: [f64; 3] = [52_800.0, 53_200.0, 53_600.0];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SignalTally {
    pub buy: usize,
    pub neutral: usize,
    pub sell: usize,
}

impl SignalTally {
    pub fn of(indicators: &[Indicator]) -> Self {
        indicators.iter().fold(Self::default(), |mut tally, indicator| {
            match indicator.signal {
                Signal::Buy => tally.buy += 1,
                Signal::Sell => tally.sell += 1,
                Signal::Neutral => tally.neutral += 1,
            }
            tally
        })
    }

    /// Majority of buy vs sell; ties are neutral.
    pub fn overall(&self) -> Signal {
        match self.buy.cmp(&self.sell) {
            std::cmp::Ordering::Greater => Signal::Buy,
            std::cmp::Ordering::Less => Signal::Sell,
            std::cmp::Ordering::Equal => Signal::Neutral,
        }
    }
}

// ---------- Fundamentals -----------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: f64,
    pub description: &'static str,
}

pub const FUNDAMENTAL_METRICS: [Metric; 4] = [
    Metric {
        label: "Market Cap",
        value: "$1.2T",
        change: 2.5,
        description: "Total market value of the asset",
    },
    Metric {
        label: "Volume 24h",
        value: "$45.2B",
        change: -1.2,
        description: "Traded volume over the last 24 hours",
    },
    Metric {
        label: "Circulating Supply",
        value: "19.8M",
        change: 0.1,
        description: "Coins currently circulating",
    },
    Metric {
        label: "Active Addresses",
        value: "1.2M",
        change: 5.8,
        description: "Addresses active in the last 24 hours",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub impact: Impact,
    pub age: &'static str,
}

pub const NEWS: [NewsItem; 4] = [
    NewsItem {
        title: "Institutional adoption accelerates",
        summary: "Several large companies announced Bitcoin allocations as a treasury reserve.",
        impact: Impact::Positive,
        age: "2 hours ago",
    },
    NewsItem {
        title: "European crypto regulation",
        summary: "The EU published a clearer regulatory framework for crypto assets.",
        impact: Impact::Positive,
        age: "5 hours ago",
    },
    NewsItem {
        title: "Elevated market volatility",
        summary: "Crypto markets swing sharply on global macro uncertainty.",
        impact: Impact::Negative,
        age: "8 hours ago",
    },
    NewsItem {
        title: "Bitcoin network upgrade",
        summary: "A proposal to improve network scalability and efficiency is under review.",
        impact: Impact::Positive,
        age: "1 day ago",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub value: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
}

pub const SENTIMENT_SCORES: [SentimentScore; 3] = [
    SentimentScore { value: "72%", label: "Bullish", caption: "Fear & Greed Index" },
    SentimentScore { value: "8.5", label: "Social Score", caption: "Media & Social Sentiment" },
    SentimentScore { value: "65%", label: "Institutional", caption: "Institutional Interest" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub when: &'static str,
    pub event: &'static str,
    pub high_impact: bool,
}

pub const ECONOMIC_CALENDAR: [CalendarEvent; 4] = [
    CalendarEvent { when: "Today", event: "Fed Interest Rate Decision", high_impact: true },
    CalendarEvent { when: "Tomorrow", event: "US Inflation Data (CPI)", high_impact: true },
    CalendarEvent { when: "In 3 days", event: "Bitcoin Conference", high_impact: false },
    CalendarEvent { when: "In 1 week", event: "Ethereum Upgrade Proposal", high_impact: false },
];

// ---------- Market overview --------------------------------------------------

/// Static quote row used by the overview table and the watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub pair: &'static str,
    pub ticker: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: &'static str,
    pub market_cap: &'static str,
}

pub const TOP_CRYPTOS: [Quote; 5] = [
    Quote {
        pair: "BTCUSDT",
        ticker: "BTC",
        name: "Bitcoin",
        price: 52_450.30,
        change: 1_250.45,
        change_percent: 2.44,
        volume: "$28.5B",
        market_cap: "$1.02T",
    },
    Quote {
        pair: "ETHUSDT",
        ticker: "ETH",
        name: "Ethereum",
        price: 3_245.67,
        change: -85.23,
        change_percent: -2.56,
        volume: "$15.2B",
        market_cap: "$390.2B",
    },
    Quote {
        pair: "BNBUSDT",
        ticker: "BNB",
        name: "BNB",
        price: 425.89,
        change: 12.34,
        change_percent: 2.98,
        volume: "$2.1B",
        market_cap: "$65.4B",
    },
    Quote {
        pair: "SOLUSDT",
        ticker: "SOL",
        name: "Solana",
        price: 145.23,
        change: 8.45,
        change_percent: 6.18,
        volume: "$3.8B",
        market_cap: "$64.2B",
    },
    Quote {
        pair: "ADAUSDT",
        ticker: "ADA",
        name: "Cardano",
        price: 0.5234,
        change: -0.0123,
        change_percent: -2.30,
        volume: "$890M",
        market_cap: "$18.5B",
    },
];

/// Quotes the watchlist knows without a fetch.
pub const WATCHLIST_QUOTE_PAIRS: [&str; 4] = ["BTCUSDT", "ETHUSDT", "BNBUSDT", "SOLUSDT"];

pub fn known_quote(symbol: &Symbol) -> Option<&'static Quote> {
    if !WATCHLIST_QUOTE_PAIRS.contains(&symbol.value()) {
        return None;
    }
    TOP_CRYPTOS.iter().find(|q| q.pair == symbol.value())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: f64,
}

pub const MARKET_STATS: [MarketStat; 4] = [
    MarketStat { label: "Total Market Cap", value: "$2.45T", change: 2.1 },
    MarketStat { label: "24h Volume", value: "$89.2B", change: -1.5 },
    MarketStat { label: "BTC Dominance", value: "51.2%", change: 0.8 },
    MarketStat { label: "Active Coins", value: "2,847", change: 0.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FearGreed {
    pub score: u8,
    pub label: &'static str,
    pub description: &'static str,
}

pub const FEAR_GREED: FearGreed = FearGreed {
    score: 72,
    label: "Greed",
    description: "The market shows strong greed sentiment",
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mover {
    pub ticker: &'static str,
    pub change: f64,
}

pub const TOP_MOVERS: [Mover; 3] = [
    Mover { ticker: "SOL", change: 15.2 },
    Mover { ticker: "AVAX", change: 12.8 },
    Mover { ticker: "MATIC", change: -8.5 },
];

// ---------- Symbols ----------------------------------------------------------

pub const POPULAR_SYMBOLS: [&str; 10] = [
    "BTCUSDT", "ETHUSDT", "BNBUSDT", "ADAUSDT", "SOLUSDT", "XRPUSDT", "DOTUSDT", "LINKUSDT",
    "LTCUSDT", "BCHUSDT",
];

/// Popular symbols containing `query`, case-insensitively. Empty query keeps all.
pub fn filter_symbols(query: &str) -> Vec<Symbol> {
    let needle = query.trim().to_lowercase();
    POPULAR_SYMBOLS
        .iter()
        .filter(|symbol| symbol.to_lowercase().contains(&needle))
        .map(|symbol| Symbol::from(*symbol))
        .collect()
}

// ---------- Simulated alerts -------------------------------------------------

const ALERT_TEMPLATES: [(NotificationCategory, &str, &str, Severity); 3] = [
    (NotificationCategory::Price, "Price Alert", "BTC reached the $52,500 target", Severity::Success),
    (
        NotificationCategory::Technical,
        "Technical Signal",
        "ETH RSI entered the oversold zone",
        Severity::Warning,
    ),
    (
        NotificationCategory::News,
        "Market News",
        "The Fed announced its interest rate decision",
        Severity::Info,
    ),
];

/// One simulated alert tick: fires with `probability`, then picks a template.
pub fn roll_alert<R: RandomSource + ?Sized>(rng: &R, probability: f64) -> Option<NotificationDraft> {
    if !rng.chance(probability) {
        return None;
    }
    let (category, title, message, severity) = ALERT_TEMPLATES[rng.index(ALERT_TEMPLATES.len())];
    Some(NotificationDraft::new(category, title, message, severity))
}
