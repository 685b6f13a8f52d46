//! Static card content and campaign configuration
//!
//! Everything in this module is compiled in. The carousel only ever reads
//! from [`CARDS`] and [`CONFIG`]; nothing here is mutated at runtime.

/// One page of the card-news story
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// 1-based id, defines display order
    pub id: u32,
    /// May contain embedded line breaks; rendered verbatim
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub body: Option<&'static str>,
    /// Hashtag label
    pub keyword: &'static str,
    /// Remote image URL, handed to the renderer as-is
    pub image: &'static str,
    /// Badge text, hidden on the last page
    pub button_text: Option<&'static str>,
    pub is_last_page: bool,
}

/// External links opened from the final page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub donation: &'static str,
    pub homepage: &'static str,
    pub tax_benefit: &'static str,
}

/// Identity of the organization shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterInfo {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

/// Image URLs, one per page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Images {
    pub page1: &'static str,
    pub page2: &'static str,
    pub page3: &'static str,
    pub page4: &'static str,
    pub page5: &'static str,
}

/// Campaign-wide configuration block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub images: Images,
    pub links: Links,
    pub center_info: CenterInfo,
}

pub const CONFIG: Config = Config {
    images: Images {
        page1: "https://i.postimg.cc/RZpMjVx7/photo1.jpg",
        page2: "https://i.postimg.cc/yYYCs4jY/photo2.jpg",
        page3: "https://i.postimg.cc/LXPqzmdk/photo3.png",
        page4: "https://i.postimg.cc/WbTDkR5c/photo4.jpg",
        page5: "https://i.postimg.cc/QdnVwFhT/photo5.jpg",
    },
    links: Links {
        donation: "https://www.ihappynanum.com/Nanum/B/KV58E5SU28",
        homepage: "http://www.kongjon.or.kr/",
        tax_benefit: "http://www.kongjon.or.kr/4_1.php",
    },
    center_info: CenterInfo {
        name: "사회적협동조합 공존",
        address: "사회적협동조합 공존 부일로 232, 3층 22호",
        phone: "032-710-3650",
    },
};

pub static CARDS: [Card; 5] = [
    Card {
        id: 1,
        title: "지난 한 해의 격동을 뒤로하고,\n새로운 한 해를 맞이하였습니다.",
        subtitle: Some("우리의 평범한 일상이 특별한 기적이 됩니다"),
        body: Some("여러분의 건강과 행복을 진심으로 기원합니다.\n올해도 공존과 함께해 주셔서 감사합니다."),
        keyword: "#평범한일상 #특별한기적",
        image: CONFIG.images.page1,
        button_text: None,
        is_last_page: false,
    },
    Card {
        id: 2,
        title: "설립 5년, 그동안 쌓아온\n소중한 일상의 경험들",
        subtitle: None,
        body: Some("발달장애인들이 비장애인의 삶 속에서 함께 공존하는 삶을 준비할 수 있도록 일상을 축적해왔습니다."),
        keyword: "#공존의준비 #일상의축적",
        image: CONFIG.images.page2,
        button_text: None,
        is_last_page: false,
    },
    Card {
        id: 3,
        title: "형제 자매의 힘겨운 돌봄,\n이제 우리가 나설 때입니다",
        subtitle: None,
        body: Some("보호자의 고령화로 남겨진 가족들의 어깨가 무거워지고 있습니다. 독립을 위한 공동주택 운영이 시급합니다."),
        keyword: "#함께돌봄 #그룹홈필요",
        image: CONFIG.images.page3,
        button_text: None,
        is_last_page: false,
    },
    Card {
        id: 4,
        title: "공존의 울타리가\n되어주시겠어요?",
        subtitle: None,
        body: Some("공존이 멈추지 않고 운영되기 위해서는 여러분의 정기적인 손길이 필요합니다. 작은 나눔이 커다란 울타리가 됩니다."),
        keyword: "#작은나눔 #커다란울타리",
        image: CONFIG.images.page4,
        button_text: Some("월 1~2만원의 기적"),
        is_last_page: false,
    },
    Card {
        id: 5,
        title: "지금, 당신의 사랑을\n전달해주세요",
        subtitle: None,
        body: Some("매달 커피 몇 잔의 금액으로 발달장애인의 내일을 바꿀 수 있습니다. 연말정산 시 세제 혜택도 가능합니다."),
        keyword: "#사랑의실천 #내일의희망",
        image: CONFIG.images.page5,
        button_text: None,
        is_last_page: true,
    },
];

/// Number of cards in the story
pub fn card_count() -> usize {
    CARDS.len()
}

/// Get a card by 0-based index
pub fn card(index: usize) -> Option<&'static Card> {
    CARDS.get(index)
}

/// Fixed attribution caption overlaid on the image of specific cards
pub fn attribution(card_id: u32) -> Option<&'static str> {
    match card_id {
        1 => Some("출처 : 오마이뉴스"),
        3 => Some("자료 : 보건복지부"),
        _ => None,
    }
}
