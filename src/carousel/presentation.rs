//! Per-page presentation descriptor
//!
//! All index-keyed layout decisions live here so the renderer never compares
//! raw indices itself. A [`Presentation`] is computed once per page change
//! and read by every pane.

use crate::content::{self, Card};

/// Height of the image panel as a share of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageHeight {
    /// 42% (second page)
    Tall,
    /// 35% (first and third pages)
    Standard,
    /// 33% (fourth page onward)
    Short,
}

impl ImageHeight {
    pub fn for_index(index: usize) -> Self {
        match index {
            1 => ImageHeight::Tall,
            i if i >= 3 => ImageHeight::Short,
            _ => ImageHeight::Standard,
        }
    }

    pub fn percent(self) -> u16 {
        match self {
            ImageHeight::Tall => 42,
            ImageHeight::Standard => 35,
            ImageHeight::Short => 33,
        }
    }
}

/// Spacing and line-height tokens for the text area, in terminal rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingTokens {
    pub padding_top: u16,
    pub padding_bottom: u16,
    /// Gap below the top keyword chip
    pub keyword_gap: u16,
    /// Blank rows between subtitle, body and badge
    pub paragraph_gap: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingTier {
    /// Pages before the appeal (index < 3)
    Regular,
    /// Appeal pages (index >= 3)
    Relaxed,
}

impl SpacingTier {
    pub fn for_index(index: usize) -> Self {
        if index >= 3 {
            SpacingTier::Relaxed
        } else {
            SpacingTier::Regular
        }
    }

    pub fn tokens(self) -> SpacingTokens {
        match self {
            SpacingTier::Regular => SpacingTokens {
                padding_top: 1,
                padding_bottom: 1,
                keyword_gap: 2,
                paragraph_gap: 0,
            },
            SpacingTier::Relaxed => SpacingTokens {
                padding_top: 2,
                padding_bottom: 0,
                keyword_gap: 1,
                paragraph_gap: 1,
            },
        }
    }
}

/// Where the hashtag chip goes on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSlot {
    /// Above the title
    Top,
    /// Below the body (first page only)
    Bottom,
    Hidden,
}

impl KeywordSlot {
    pub fn for_page(index: usize, keyword: &str) -> Self {
        if keyword.is_empty() {
            KeywordSlot::Hidden
        } else if index == 0 {
            KeywordSlot::Bottom
        } else {
            KeywordSlot::Top
        }
    }
}

/// Interactive state of a navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Everything the renderer needs to lay out one page
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub index: usize,
    pub total: usize,
    pub card: &'static Card,
    pub is_last_page: bool,
    pub image_height: ImageHeight,
    pub spacing: SpacingTier,
    pub keyword_slot: KeywordSlot,
    /// Extra rows above the title when the keyword moved to the bottom
    pub title_offset: u16,
    pub badge: Option<&'static str>,
    /// One entry per card; `true` when filled
    pub progress: Vec<bool>,
    pub page_counter: String,
    pub nav: NavButtons,
    pub attribution: Option<&'static str>,
}

impl Presentation {
    /// Build the descriptor for page `index`, or `None` if out of range
    pub fn for_index(index: usize) -> Option<Self> {
        let card = content::card(index)?;
        let total = content::card_count();
        let is_last_page = index + 1 == total;
        let keyword_slot = KeywordSlot::for_page(index, card.keyword);

        Some(Presentation {
            index,
            total,
            card,
            is_last_page,
            image_height: ImageHeight::for_index(index),
            spacing: SpacingTier::for_index(index),
            keyword_slot,
            title_offset: if keyword_slot == KeywordSlot::Bottom { 1 } else { 0 },
            badge: card.button_text.filter(|_| !is_last_page),
            progress: (0..total).map(|idx| idx <= index).collect(),
            page_counter: format!("{} / {}", index + 1, total),
            nav: NavButtons {
                previous_enabled: index > 0,
                next_enabled: !is_last_page,
            },
            attribution: content::attribution(card.id),
        })
    }

    /// Whether dot `idx` of the page indicator is the active one
    pub fn is_active_dot(&self, idx: usize) -> bool {
        idx == self.index
    }

    pub fn spacing_tokens(&self) -> SpacingTokens {
        self.spacing.tokens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(index: usize) -> Presentation {
        Presentation::for_index(index).unwrap()
    }

    #[test]
    fn test_image_height_tiers() {
        let percents: Vec<u16> = (0..5).map(|i| page(i).image_height.percent()).collect();
        assert_eq!(percents, vec![35, 42, 35, 33, 33]);
    }

    #[test]
    fn test_spacing_tiers_are_independent_of_height() {
        let tiers: Vec<SpacingTier> = (0..5).map(|i| page(i).spacing).collect();
        assert_eq!(
            tiers,
            vec![
                SpacingTier::Regular,
                SpacingTier::Regular,
                SpacingTier::Regular,
                SpacingTier::Relaxed,
                SpacingTier::Relaxed,
            ]
        );
        let regular = SpacingTier::Regular.tokens();
        let relaxed = SpacingTier::Relaxed.tokens();
        assert!(relaxed.padding_top > regular.padding_top);
        assert!(relaxed.paragraph_gap > regular.paragraph_gap);
        assert!(regular.keyword_gap > relaxed.keyword_gap);
    }

    #[test]
    fn test_keyword_moves_to_bottom_on_first_page() {
        assert_eq!(page(0).keyword_slot, KeywordSlot::Bottom);
        assert_eq!(page(0).title_offset, 1);
        for i in 1..5 {
            assert_eq!(page(i).keyword_slot, KeywordSlot::Top, "page {}", i);
            assert_eq!(page(i).title_offset, 0);
        }
    }

    #[test]
    fn test_empty_keyword_is_hidden() {
        assert_eq!(KeywordSlot::for_page(0, ""), KeywordSlot::Hidden);
        assert_eq!(KeywordSlot::for_page(3, ""), KeywordSlot::Hidden);
    }

    #[test]
    fn test_progress_fills_up_to_current() {
        for current in 0..5 {
            let progress = page(current).progress;
            assert_eq!(progress.len(), 5);
            for (idx, filled) in progress.iter().enumerate() {
                assert_eq!(*filled, idx <= current, "segment {} at page {}", idx, current);
            }
        }
    }

    #[test]
    fn test_last_page_only_at_end() {
        let flags: Vec<bool> = (0..5).map(|i| page(i).is_last_page).collect();
        assert_eq!(flags, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_nav_buttons_disable_at_bounds() {
        assert_eq!(
            page(0).nav,
            NavButtons {
                previous_enabled: false,
                next_enabled: true
            }
        );
        assert_eq!(
            page(2).nav,
            NavButtons {
                previous_enabled: true,
                next_enabled: true
            }
        );
        assert_eq!(
            page(4).nav,
            NavButtons {
                previous_enabled: true,
                next_enabled: false
            }
        );
    }

    #[test]
    fn test_badge_only_on_card_with_button_text() {
        assert_eq!(page(3).badge, Some("월 1~2만원의 기적"));
        assert!(page(0).badge.is_none());
        assert!(page(4).badge.is_none());
    }

    #[test]
    fn test_page_counter_and_dots() {
        let p = page(2);
        assert_eq!(p.page_counter, "3 / 5");
        assert!(p.is_active_dot(2));
        assert!(!p.is_active_dot(1));
    }

    #[test]
    fn test_attribution_on_first_and_third_cards() {
        assert!(page(0).attribution.is_some());
        assert!(page(1).attribution.is_none());
        assert!(page(2).attribution.is_some());
        assert!(page(3).attribution.is_none());
    }

    #[test]
    fn test_out_of_range_index() {
        assert!(Presentation::for_index(5).is_none());
    }
}
