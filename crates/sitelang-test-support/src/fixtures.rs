//! Fixture dictionaries and a page carrying every localization hook.

use serde_json::{Value, json};

use crate::dom::FakeElement;

fn el(selector: &str) -> FakeElement {
    FakeElement::new(selector)
}

fn title_block(text: &str) -> FakeElement {
    el("div.section__title").child(el("h2.f-section-title").text(text))
}

fn popup_panel(id: &str) -> FakeElement {
    el("div.popupBox__content").attr("data-popup-id", id).children([
        el("p.text__title"),
        el("p.text__desc"),
        el("dl.text__tags").children([el("dt"), el("dd")]),
        el("p.previewTitle"),
        el("div.previewContent").text("<p>static</p>"),
    ])
}

fn header() -> FakeElement {
    el("header.l-header").layout(0.0, 80.0).child(
        el("div.sticky-wrapper").layout(0.0, 100.0).with_content_height(80.0).children([
            el("button.js-navOpen"),
            el("nav.js-navigation").children([
                el("button.js-navClose"),
                el("a.navbarText.js-anchor")
                    .attr("data-json-key", "about")
                    .attr("href", "#about")
                    .children([el("span").text("關於"), el("span").text("關於")]),
                el("a.navbarText.js-anchor")
                    .attr("data-json-key", "news")
                    .attr("href", "#news")
                    .text("最新消息"),
                el("a.navbarText")
                    .attr("data-json-key", "unknown")
                    .text("保留"),
            ]),
            el("button#langToggleBtn").text("EN"),
        ]),
    )
}

fn opening() -> FakeElement {
    el("section#opening").children([
        el("p.intro__text").text("靜態一"),
        el("p.intro__text").text("靜態二"),
    ])
}

fn about() -> FakeElement {
    el("section#about").layout(900.0, 600.0).children([
        el("div#aboutGroup1").children([
            el("h3.sectionGroup__title"),
            el("p.f-section-p"),
            el("p.f-section-p"),
        ]),
        el("div#aboutGroup2").children([el("h3.sectionGroup__title"), el("p.f-section-p")]),
    ])
}

fn cards(section: &str, kind: &str, offset: f64) -> FakeElement {
    el(&format!("section#{section}.section--{section}"))
        .layout(offset, 500.0)
        .children([
            title_block(""),
            el(&format!("div.cardsSwiper--{kind}"))
                .child(el("div.swiper-wrapper").text("<div class=\"swiper-slide\">static</div>")),
        ])
}

fn preview() -> FakeElement {
    el("section#preview").children([
        el("div.previewGroup--curating").children([
            el("div.previewGroup__title").child(el("h2.f-section-title")),
            el("div.previewGroup__title").child(el("h2.f-section-title")),
            el("div.intro").child(el("p.f-section-p")),
            el("p.hint__text"),
        ]),
        el("div.previewGroup--features").children([
            el("div.previewGroup__title").child(el("h2.f-section-title")),
            el("ul.featuresList").children([
                el("a").attr("data-json-key", "feature1").attr("href", "#"),
                el("div").attr("data-json-key", "feature2"),
                el("img").attr("data-json-key", "feature3"),
                el("div")
                    .attr("data-json-key", "feature4")
                    .attr("data-links-container", ""),
            ]),
        ]),
    ])
}

fn imagery_group() -> FakeElement {
    el("div.imageryGroup").children([
        el("div.imageryGroup__title").child(el("h4.f-section-h4")),
        el("div.imageryGroup__image").children([el("img.display--pc"), el("img.display--mb")]),
    ])
}

fn vi() -> FakeElement {
    el("section#vi.section--vi").children([
        el("div.section__title").children([el("span.topic"), el("span.sub")]),
        el("div.viGroup--intro").children([
            el("span.topic"),
            el("span.sub"),
            el("div.coverImg").child(el("img")),
            el("div.introText__paragraph").children([el("p.f-section-p"), el("p.f-section-p")]),
        ]),
        el("div.viGroup__image").children([el("img.display--pc"), el("img.display--mb")]),
        el("div.viGroup--imagery").children([
            el("div.viGroup__title").child(el("h3.f-section-title")),
            imagery_group(),
            imagery_group(),
            imagery_group(),
        ]),
        el("div.wheel-section").attr("data-section", "1"),
        el("div.center-circle").attr("data-section", "center"),
    ])
}

fn participation() -> FakeElement {
    el("section#participation").children([
        title_block(""),
        el("div.intro").child(el("p")),
        el("div.rule").children([
            el("h3.rule__title"),
            el("ul").children([
                el("li").child(el("p.f-section-h5")),
                el("li").child(el("p.f-section-h5")),
            ]),
        ]),
        el("div.rule").children([
            el("h3.rule__title").text("資訊"),
            el("p.f-section-h5").text("靜態資訊"),
        ]),
        el("div.action").children([
            el("a.btn").child(el("span.btn__text")),
            el("a.btn").child(el("span.btn__text")),
        ]),
    ])
}

fn authorization() -> FakeElement {
    el("section#authorization").children([
        title_block(""),
        el("div.intro").children([el("p"), el("p")]),
        el("div.rule").children([
            el("h3.rule__title"),
            el("ul.rule__list").children([el("li.f-section-h5"), el("li.f-section-h5")]),
        ]),
        el("div.action").child(el("a.btn").child(el("span.btn__text"))),
    ])
}

fn contact() -> FakeElement {
    el("footer#contact").children([
        el("p.department"),
        el("ul.info").text("<li>static</li>"),
        el("ul.sectors").text("<li>static</li>"),
    ])
}

fn popup() -> FakeElement {
    el("div#popup").children([
        el("div.popup__overlay"),
        el("div.popupBox").children([
            el("button.btn--closePopup"),
            popup_panel("0"),
            popup_panel("1"),
            popup_panel("2"),
        ]),
    ])
}

/// `<html>` root of a page with every hook the binders and chrome use.
#[must_use]
pub fn page() -> FakeElement {
    el("html").attr("lang", "zh-TW").child(el("body.lang--zh").children([
        header(),
        opening(),
        about(),
        cards("news", "news", 1500.0),
        cards("event", "event", 2000.0),
        preview(),
        vi(),
        participation(),
        authorization(),
        el("section#style").child(title_block("")),
        contact(),
        popup(),
    ]))
}

/// Complete Traditional Chinese dictionary.
#[must_use]
pub fn zh_dictionary() -> Value {
    json!({
        "nav": { "about": "關於展覽", "news": "最新消息" },
        "opening": { "introTexts": ["山海之間", "文化之心"] },
        "about": {
            "aboutGroup1": { "title": "緣起", "texts": ["第一段", "第二段"] },
            "aboutGroup2": { "title": "理念", "texts": ["理念段落"] }
        },
        "news": {
            "title": "最新消息",
            "newsData": [{
                "imgSrc": "assets/images/news/1.jpg",
                "imgAlt": "開幕",
                "date": "2024.05.01",
                "title": "開幕典禮",
                "desc": "歡迎參加",
                "url": "https://example.org/news/1"
            }]
        },
        "event": {
            "title": "活動",
            "eventData": [{
                "date": "05.20",
                "imgSrc": "assets/images/event/1.jpg",
                "imgAlt": "市集",
                "title": "週末市集",
                "location": "台東",
                "url": "https://example.org/event/1"
            }]
        },
        "preview": {
            "curatingTitle1": "策展",
            "curatingTitle2": "預覽",
            "curatingIntro": "策展介紹",
            "curatingHint": "點擊圖示",
            "featuresTitle": "特色",
            "features": {
                "feature1": { "text": "官方網站", "href": "https://example.org/zh" },
                "feature2": "手作體驗",
                "feature3": { "alt": "地圖" },
                "feature4": { "links": [{ "href": "https://example.org/a", "text": "連結甲" }] }
            }
        },
        "vi": {
            "title": "視覺識別",
            "subtitle": "設計概念",
            "logoAlt": "標誌",
            "introTexts": ["介紹一", "介紹二"],
            "imageryTitle": "意象",
            "imageryItems": ["自然", "文化", "驚艷"]
        },
        "participation": {
            "title": "參與方式",
            "intro": "歡迎參與",
            "highlightTitle": "亮點",
            "highlightItems": ["亮點一", "亮點二"],
            "infoTitle": "參與資訊",
            "actionItems": ["報名", "下載"]
        },
        "authorization": {
            "title": "授權",
            "introTexts": ["授權說明一", "授權說明二"],
            "applicationTitle": "申請方式",
            "applicationItems": ["步驟一", "步驟二"],
            "actionItems": ["申請"]
        },
        "style": { "title": "風格" },
        "contact": {
            "department": "主辦單位",
            "info": ["電話 089-000000", "信箱 hello@example.org"],
            "sectors": ["指導單位", "執行單位"]
        },
        "popup": {
            "0": {
                "title": "核心",
                "desc": "核心說明",
                "tagsTitle": "標籤",
                "tags": "山、海",
                "previewTitle": "預覽",
                "previewContent": ["段落一", "段落二"]
            },
            "1": { "title": "第一區", "desc": "第一區說明" }
        }
    })
}

/// Complete English dictionary.
#[must_use]
pub fn en_dictionary() -> Value {
    json!({
        "nav": { "about": "About", "news": "News" },
        "opening": { "introTexts": ["Between mountain and sea", "Heart of culture"] },
        "about": {
            "aboutGroup1": { "title": "Origins", "texts": ["First paragraph", "Second paragraph"] },
            "aboutGroup2": { "title": "Vision", "texts": ["Vision paragraph"] }
        },
        "news": {
            "title": "News",
            "newsData": [
                {
                    "imgSrc": "assets/images/news/1.jpg",
                    "imgAlt": "Opening",
                    "date": "2024.05.01",
                    "title": "Opening ceremony",
                    "desc": "Join us",
                    "url": "https://example.org/news/1"
                },
                {
                    "imgSrc": "assets/images/news/2.jpg",
                    "imgAlt": "Tour",
                    "date": "2024.05.08",
                    "title": "Guided tour",
                    "desc": "Book now",
                    "url": "https://example.org/news/2"
                }
            ]
        },
        "event": {
            "title": "Events",
            "eventData": [{
                "date": "05.20",
                "imgSrc": "assets/images/event/1.jpg",
                "imgAlt": "Market",
                "title": "Weekend market",
                "location": "Taitung",
                "url": "https://example.org/event/1"
            }]
        },
        "preview": {
            "curatingTitle1": "Curating",
            "curatingTitle2": "Preview",
            "curatingIntro": "Curatorial note",
            "curatingHint": "Tap an icon",
            "featuresTitle": "Features",
            "features": {
                "feature1": { "text": "Official site", "href": "https://example.org/en" },
                "feature2": "Hands-on workshops",
                "feature3": { "alt": "Map" },
                "feature4": { "links": [{ "href": "https://example.org/a", "text": "Link <A>" }] }
            }
        },
        "vi": {
            "title": "Visual Identity",
            "subtitle": "Design concept",
            "logoAlt": "Logo",
            "introTexts": ["Intro one", "Intro two"],
            "imageryTitle": "Imagery",
            "imageryItems": ["Nature", "Culture", "Amazing"]
        },
        "participation": {
            "title": "Participate",
            "intro": "Everyone is welcome",
            "highlightTitle": "Highlights",
            "highlightItems": ["Highlight one", "Highlight two"],
            "infoTitle": "Information",
            "actionItems": ["Register", "Download"]
        },
        "authorization": {
            "title": "Authorization",
            "introTexts": ["Licensing one", "Licensing two"],
            "applicationTitle": "How to apply",
            "applicationItems": ["Step one", "Step two"],
            "actionItems": ["Apply"]
        },
        "style": { "title": "Style" },
        "contact": {
            "department": "Organizer",
            "info": ["Tel 089-000000", "Mail hello@example.org"],
            "sectors": ["Supervisor", "Executor"]
        },
        "popup": {
            "0": {
                "title": "Core",
                "desc": "Core description",
                "tagsTitle": "Tags",
                "tags": "Mountain, Sea",
                "previewTitle": "Preview",
                "previewContent": ["Paragraph one", "Paragraph two"]
            },
            "1": { "title": "Zone one", "desc": "Zone one description" }
        }
    })
}

/// `document` with the named top-level sections removed.
#[must_use]
pub fn without_sections(mut document: Value, sections: &[&str]) -> Value {
    if let Value::Object(map) = &mut document {
        for section in sections {
            map.remove(*section);
        }
    }
    document
}
