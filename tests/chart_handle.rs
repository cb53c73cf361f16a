use std::cell::RefCell;
use std::rc::Rc;

use trading_dashboard_wasm::domain::chart::{
    ChartDimensions, ChartHandle, ChartSeries, ChartSurface, ChartTheme,
};
use trading_dashboard_wasm::domain::errors::{AppError, AppResult};
use trading_dashboard_wasm::domain::market_data::services::SeriesGenerator;
use trading_dashboard_wasm::domain::market_data::{Symbol, TimeFrame};
use trading_dashboard_wasm::domain::random::SeededRandom;

#[derive(Debug, Default)]
struct Journal {
    draws: Vec<(usize, TimeFrame, &'static str)>,
    resizes: Vec<ChartDimensions>,
    releases: usize,
}

struct RecordingSurface {
    dims: ChartDimensions,
    journal: Rc<RefCell<Journal>>,
}

impl RecordingSurface {
    fn new(journal: &Rc<RefCell<Journal>>) -> Self {
        Self { dims: ChartDimensions::new(800, 500), journal: Rc::clone(journal) }
    }
}

impl ChartSurface for RecordingSurface {
    fn dimensions(&self) -> ChartDimensions {
        self.dims
    }

    fn resize(&mut self, dims: ChartDimensions) -> AppResult<()> {
        self.dims = dims;
        self.journal.borrow_mut().resizes.push(dims);
        Ok(())
    }

    fn draw(&mut self, series: &ChartSeries, theme: &ChartTheme) -> AppResult<()> {
        self.journal.borrow_mut().draws.push((series.len(), series.timeframe, theme.background));
        Ok(())
    }

    fn release(&mut self) {
        self.journal.borrow_mut().releases += 1;
    }
}

fn series(seed: u64, timeframe: TimeFrame) -> ChartSeries {
    let rng = SeededRandom::new(seed);
    let candles = SeriesGenerator::new(&rng).generate(timeframe, 1_700_000_000);
    ChartSeries::from_candles(Symbol::from("BTCUSDT"), timeframe, candles)
}

#[test]
fn open_paints_an_empty_chart() {
    let journal = Rc::default();
    let handle = ChartHandle::open(RecordingSurface::new(&journal), ChartTheme::LIGHT).unwrap();
    assert!(handle.is_open());
    assert!(handle.series().is_empty());
    assert_eq!(journal.borrow().draws, vec![(0, TimeFrame::OneDay, ChartTheme::LIGHT.background)]);
}

#[test]
fn timeframe_change_replaces_series_wholesale() {
    let journal = Rc::default();
    let mut handle = ChartHandle::open(RecordingSurface::new(&journal), ChartTheme::LIGHT).unwrap();

    handle.update(series(1, TimeFrame::OneDay)).unwrap();
    handle.update(series(2, TimeFrame::OneMinute)).unwrap();

    let current = handle.series();
    assert_eq!(current.timeframe, TimeFrame::OneMinute);
    assert_eq!(current.len(), TimeFrame::OneMinute.point_count());
    assert_eq!(current.volume().len(), current.len());
    assert_eq!(current, &series(2, TimeFrame::OneMinute));

    let last_draw = journal.borrow().draws.last().copied();
    assert_eq!(last_draw, Some((60, TimeFrame::OneMinute, ChartTheme::LIGHT.background)));
}

#[test]
fn resize_skips_empty_and_unchanged_sizes() {
    let journal = Rc::default();
    let mut handle = ChartHandle::open(RecordingSurface::new(&journal), ChartTheme::LIGHT).unwrap();

    handle.resize(ChartDimensions::new(800, 500)).unwrap();
    handle.resize(ChartDimensions::new(0, 500)).unwrap();
    assert!(journal.borrow().resizes.is_empty());

    handle.resize(ChartDimensions::new(1024, 500)).unwrap();
    assert_eq!(journal.borrow().resizes, vec![ChartDimensions::new(1024, 500)]);
    assert_eq!(journal.borrow().draws.len(), 2);
}

#[test]
fn theme_switch_redraws_without_touching_data() {
    let journal = Rc::default();
    let mut handle = ChartHandle::open(RecordingSurface::new(&journal), ChartTheme::LIGHT).unwrap();
    handle.update(series(3, TimeFrame::FourHours)).unwrap();
    let before = handle.series().clone();

    handle.set_theme(ChartTheme::DARK).unwrap();
    handle.set_theme(ChartTheme::DARK).unwrap();

    assert_eq!(handle.series(), &before);
    assert_eq!(handle.theme(), &ChartTheme::DARK);
    let draws = &journal.borrow().draws;
    assert_eq!(draws.len(), 3);
    assert_eq!(draws[2].2, ChartTheme::DARK.background);
}

#[test]
fn close_is_idempotent_and_blocks_later_calls() {
    let journal = Rc::default();
    let mut handle = ChartHandle::open(RecordingSurface::new(&journal), ChartTheme::LIGHT).unwrap();

    handle.close();
    handle.close();
    assert!(!handle.is_open());
    assert_eq!(journal.borrow().releases, 1);

    let err = handle.update(series(4, TimeFrame::OneDay)).unwrap_err();
    assert!(matches!(err, AppError::Rendering(_)));
    assert!(handle.resize(ChartDimensions::new(10, 10)).is_err());

    drop(handle);
    assert_eq!(journal.borrow().releases, 1);
}

#[test]
fn drop_releases_an_open_surface() {
    let journal = Rc::default();
    {
        let _handle = ChartHandle::open(RecordingSurface::new(&journal), ChartTheme::DARK).unwrap();
    }
    assert_eq!(journal.borrow().releases, 1);
}
