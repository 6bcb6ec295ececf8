//! Cross-module behaviour of the site models: a visitor clicking through both
//! pages, and charts being mounted and torn down along the way.

use std::cell::Cell;
use std::rc::Rc;

use tandem::charts::{doughnut_layout, ChartBackend, ChartError, ChartHandle, Rect};
use tandem::content::{InsightCategory, TopicKey, INSIGHTS, PROMPT_PLACEHOLDER};
use tandem::state::{Effect, Page};
use tandem::{
    ChartId, ChartSlot, ChartSpec, InsightFilter, PromptTopic, SiteConfig, SiteState,
};

#[test]
fn visitor_walks_both_pages() {
    let mut site = SiteState::new(&SiteConfig::default());
    assert_eq!(site.page(), Page::Retro);

    // Retro page
    site.retro.insights.set_filter(InsightFilter::Only(InsightCategory::Friction));
    site.retro.explorer.select_segment(TopicKey::CareerStability.index());

    // Over to home
    assert_eq!(site.navigate(Page::Home), Effect::ScrollToTop);
    assert_eq!(site.home.prompt.display(), PROMPT_PLACEHOLDER);

    let effects = site.home.prompt.show_topic(PromptTopic::Senior);
    assert_eq!(effects.len(), 2);
    assert!(effects.iter().all(Effect::is_deferred));

    // Back to retro; nothing there was reset
    site.navigate(Page::Retro);
    assert_eq!(
        site.retro.insights.filter(),
        InsightFilter::Only(InsightCategory::Friction)
    );
    assert_eq!(site.retro.explorer.selected(), TopicKey::CareerStability);
    assert_eq!(site.home.prompt.active(), Some(PromptTopic::Senior));
}

#[test]
fn repeated_prompt_selection_is_stable() {
    let mut site = SiteState::new(&SiteConfig::default());
    let prompt = &mut site.home.prompt;

    prompt.select_topic(PromptTopic::Senior);
    let first = prompt.display();
    prompt.select_topic(PromptTopic::Ai);
    prompt.select_topic(PromptTopic::Senior);

    assert_eq!(prompt.display(), first);
    assert_eq!(prompt.active(), Some(PromptTopic::Senior));
}

#[test]
fn stale_pulse_timer_does_not_clear_new_pulse() {
    let mut site = SiteState::new(&SiteConfig::default());
    let prompt = &mut site.home.prompt;

    let first = match prompt.select_topic(PromptTopic::Ai).as_slice() {
        [Effect::ClearPulse { generation, .. }] => *generation,
        other => panic!("unexpected effects {:?}", other),
    };
    prompt.select_topic(PromptTopic::Portfolio);

    assert!(!prompt.clear_pulse(first));
    assert!(prompt.pulse());
    assert!(prompt.clear_pulse(prompt.generation()));
    assert!(!prompt.pulse());
}

#[test]
fn filters_partition_insights() {
    let mut site = SiteState::new(&SiteConfig::default());
    let board = &mut site.retro.insights;

    let all: Vec<u32> = board.visible().map(|e| e.id).collect();
    assert_eq!(all, INSIGHTS.iter().map(|e| e.id).collect::<Vec<_>>());

    board.set_filter(InsightFilter::Only(InsightCategory::Peak));
    let peak = board.visible().count();
    assert!(board.visible().all(|e| e.category == InsightCategory::Peak));

    board.set_filter(InsightFilter::Only(InsightCategory::Friction));
    let friction = board.visible().count();

    assert_eq!(peak + friction, all.len());
}

#[test]
fn doughnut_click_selects_matching_topic() {
    let spec = ChartSpec::for_chart(ChartId::Topics).unwrap();
    let layout = doughnut_layout(
        Rect::new(0.0, 0.0, 320.0, 320.0),
        &spec.dataset.values,
        spec.style.cutout,
        spec.style.hover_offset,
    );

    let mut site = SiteState::new(&SiteConfig::default());
    for key in TopicKey::ALL {
        let click = layout.label_position(key.index()).unwrap();
        let index = layout.segment_at(click).unwrap();
        assert!(site.retro.explorer.select_segment(index));
        assert_eq!(site.retro.explorer.selected(), key);
        assert_eq!(site.retro.explorer.detail().color, key.detail().color);
    }
}

struct CountingHandle(Rc<Cell<usize>>);

impl ChartHandle for CountingHandle {
    fn destroy(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

struct CountingBackend(Rc<Cell<usize>>);

impl ChartBackend for CountingBackend {
    type Surface = ();
    type Handle = CountingHandle;

    fn render(&self, _surface: &(), _spec: &ChartSpec) -> Result<CountingHandle, ChartError> {
        self.0.set(self.0.get() + 1);
        Ok(CountingHandle(self.0.clone()))
    }
}

#[test]
fn page_switches_never_stack_charts() {
    let live = Rc::new(Cell::new(0));
    let backend = CountingBackend(live.clone());
    let mut slots: Vec<ChartSlot<CountingHandle>> =
        ChartId::ALL.iter().map(|_| ChartSlot::new()).collect();

    let mut site = SiteState::new(&SiteConfig::default());
    for _ in 0..4 {
        let page = site.page().other();
        site.navigate(page);

        for (slot, id) in slots.iter_mut().zip(ChartId::ALL) {
            let spec = ChartSpec::for_chart(id).unwrap();
            slot.mount(&backend, Some(&()), &spec).unwrap();
            assert!(live.get() <= ChartId::ALL.len());
        }
    }
    assert_eq!(live.get(), ChartId::ALL.len());

    slots.clear();
    assert_eq!(live.get(), 0);
}
