use std::rc::Rc;
use std::time::Duration;

use sitelang_core::localizer::TRIGGER;
use sitelang_core::{
    CarouselKind, CarouselPlan, ContentLocalizer, Element, FetchError, LocaleCode,
    LocaleDictionary, PageHost, Section, SiteConfig, SwitchOutcome,
};
use sitelang_test_support::fixtures::{en_dictionary, without_sections, zh_dictionary};
use sitelang_test_support::{FakeElement, FakeHost, ScriptedSource};

type Localizer = ContentLocalizer<Rc<ScriptedSource>, FakeHost>;

fn localizer(source: &Rc<ScriptedSource>) -> Localizer {
    ContentLocalizer::new(
        Rc::clone(source),
        FakeHost::with_fixture_page(),
        &SiteConfig::default(),
    )
}

async fn started(source: &Rc<ScriptedSource>) -> anyhow::Result<Localizer> {
    let localizer = localizer(source);
    localizer.start().await?;
    Ok(localizer)
}

fn page(localizer: &Localizer) -> FakeElement {
    localizer.host().document()
}

#[tokio::test]
async fn start_binds_default_locale_and_document_state() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = localizer(&source);
    let report = localizer.start().await?;

    assert_eq!(report.locale, LocaleCode::Zh);
    assert_eq!(report.missing().count(), 0);
    let page = page(&localizer);
    assert_eq!(page.attribute("lang").as_deref(), Some("zh-TW"));
    assert!(page.expect("body").has_class("lang--zh"));
    assert_eq!(page.content_of(TRIGGER), "EN");
    assert_eq!(page.contents_of(".intro__text"), ["山海之間", "文化之心"]);
    assert_eq!(localizer.text("style", "title"), "風格");
    assert_eq!(source.calls(), [LocaleCode::Zh]);
    Ok(())
}

#[tokio::test]
async fn start_failure_keeps_static_markup() {
    let source = Rc::new(ScriptedSource::new());
    let localizer = localizer(&source);

    let err = localizer.start().await.err();
    assert!(matches!(
        err,
        Some(FetchError::Status {
            locale: LocaleCode::Zh,
            status: 404
        })
    ));
    assert_eq!(err.as_ref().map(FetchError::locale), Some(LocaleCode::Zh));
    let page = page(&localizer);
    assert_eq!(page.contents_of(".intro__text"), ["靜態一", "靜態二"]);
    assert_eq!(page.content_of(TRIGGER), "EN");
    assert!(localizer.active_dictionary().is_none());
}

#[tokio::test]
async fn switch_rebinds_every_region() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = started(&source).await?;

    let outcome = localizer.request_switch(LocaleCode::En).await;
    assert_eq!(outcome, SwitchOutcome::Switched(LocaleCode::En));
    assert_eq!(localizer.current(), LocaleCode::En);
    assert!(!localizer.is_busy());
    assert_eq!(localizer.host().pauses(), [Duration::from_millis(150)]);

    let page = page(&localizer);
    let body = page.expect("body");
    assert_eq!(page.attribute("lang").as_deref(), Some("en"));
    assert!(body.has_class("lang--en"));
    assert!(!body.has_class("lang--zh"));
    assert_eq!(page.content_of(TRIGGER), "中文");
    assert!(!page.expect(TRIGGER).has_attribute("disabled"));

    // nav
    assert_eq!(
        page.contents_of(r#".navbarText[data-json-key="about"] span"#),
        ["About", "About"]
    );
    assert_eq!(page.content_of(r#".navbarText[data-json-key="news"]"#), "News");
    assert_eq!(page.content_of(r#".navbarText[data-json-key="unknown"]"#), "保留");

    // opening and about
    assert_eq!(
        page.contents_of(".intro__text"),
        ["Between mountain and sea", "Heart of culture"]
    );
    assert_eq!(page.content_of("#aboutGroup1 .sectionGroup__title"), "Origins");
    assert_eq!(
        page.contents_of("#aboutGroup1 .f-section-p"),
        ["First paragraph", "Second paragraph"]
    );
    assert_eq!(page.contents_of("#aboutGroup2 .f-section-p"), ["Vision paragraph"]);

    // news and event
    assert_eq!(page.content_of("#news .f-section-title"), "News");
    let news = page.content_of(".cardsSwiper--news .swiper-wrapper");
    assert_eq!(news.matches("swiper-slide").count(), 2);
    assert!(news.contains("Guided tour"));
    assert!(news.contains(r#"href="https://example.org/news/2""#));
    let events = page.content_of(".cardsSwiper--event .swiper-wrapper");
    assert!(events.contains("<span>Taitung</span>"));
    assert!(!events.contains("台東"));

    // preview
    assert_eq!(
        page.contents_of(".previewGroup--curating .previewGroup__title .f-section-title"),
        ["Curating", "Preview"]
    );
    assert_eq!(page.content_of(".previewGroup--curating .intro .f-section-p"), "Curatorial note");
    assert_eq!(page.content_of(".hint__text"), "Tap an icon");
    let link = page.expect(r#"[data-json-key="feature1"]"#);
    assert_eq!(link.content(), "Official site");
    assert_eq!(link.attribute("href").as_deref(), Some("https://example.org/en"));
    assert_eq!(page.content_of(r#"[data-json-key="feature2"]"#), "Hands-on workshops");
    let image = page.expect(r#"[data-json-key="feature3"]"#);
    assert_eq!(image.attribute("alt").as_deref(), Some("Map"));
    assert_eq!(image.content(), "");
    let links = page.content_of(r#"[data-json-key="feature4"]"#);
    assert!(links.contains("Link &lt;A&gt;"));
    assert!(links.contains(r#"data-link-index="0""#));
    assert!(links.contains(r#"rel="noopener noreferrer""#));

    // visual identity
    assert_eq!(page.contents_of(".topic"), ["Visual Identity", "Visual Identity"]);
    assert_eq!(page.contents_of(".sub"), ["Design concept", "Design concept"]);
    assert_eq!(
        page.expect(".coverImg img").attribute("alt").as_deref(),
        Some("Logo")
    );
    assert_eq!(
        page.expect(".viGroup__image .display--pc").attribute("src").as_deref(),
        Some("assets/images/vi/img_element-pc-en.svg")
    );
    let imagery: Vec<(Option<String>, Option<String>)> = page
        .select_all(".imageryGroup__image .display--mb")
        .iter()
        .map(|img| (img.attribute("src"), img.attribute("alt")))
        .collect();
    assert_eq!(
        imagery,
        [
            (
                Some("assets/images/vi/img_nature-mb-en.svg".to_string()),
                Some("Nature".to_string())
            ),
            (
                Some("assets/images/vi/img_culture-mb-en.svg".to_string()),
                Some("Culture".to_string())
            ),
            (
                Some("assets/images/vi/img_amazing-mb-en.svg".to_string()),
                Some("Amazing".to_string())
            ),
        ]
    );

    // participation keeps highlights and info headings apart
    assert_eq!(
        page.contents_of("#participation .rule__title"),
        ["Highlights", "Information"]
    );
    assert_eq!(
        page.contents_of("#participation .rule .f-section-h5"),
        ["Highlight one", "Highlight two", "靜態資訊"]
    );
    assert_eq!(
        page.contents_of("#participation .btn__text"),
        ["Register", "Download"]
    );

    // authorization, style, contact
    assert_eq!(page.contents_of("#authorization .intro p"), ["Licensing one", "Licensing two"]);
    assert_eq!(page.content_of("#authorization .rule__title"), "How to apply");
    assert_eq!(
        page.contents_of("#authorization .rule__list .f-section-h5"),
        ["Step one", "Step two"]
    );
    assert_eq!(page.content_of("#style .f-section-title"), "Style");
    assert_eq!(page.content_of(".department"), "Organizer");
    assert_eq!(
        page.content_of(".info"),
        "<li>Tel 089-000000</li><li>Mail hello@example.org</li>"
    );
    assert_eq!(page.content_of(".sectors"), "<li>Supervisor</li><li>Executor</li>");

    // popups
    let core = page.expect(r#"[data-popup-id="0"]"#);
    assert_eq!(core.content_of(".text__title"), "Core");
    assert_eq!(core.content_of(".text__tags dt"), "Tags");
    assert_eq!(core.content_of(".text__tags dd"), "Mountain, Sea");
    assert_eq!(
        core.content_of(".previewContent"),
        "<p>Paragraph one</p><p>Paragraph two</p>"
    );
    let zone = page.expect(r#"[data-popup-id="1"]"#);
    assert_eq!(zone.content_of(".text__desc"), "Zone one description");
    assert_eq!(zone.content_of(".previewContent"), "<p>static</p>");
    assert_eq!(page.expect(r#"[data-popup-id="2"]"#).subtree_writes(), 0);
    Ok(())
}

#[tokio::test]
async fn toggle_round_trips_between_locales() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = started(&source).await?;

    assert_eq!(localizer.toggle().await, SwitchOutcome::Switched(LocaleCode::En));
    assert_eq!(localizer.toggle().await, SwitchOutcome::Switched(LocaleCode::Zh));

    let page = page(&localizer);
    assert_eq!(page.attribute("lang").as_deref(), Some("zh-TW"));
    assert_eq!(page.content_of(TRIGGER), "EN");
    assert_eq!(page.content_of("#style .f-section-title"), "風格");
    assert_eq!(
        page.expect(".viGroup__image .display--mb").attribute("src").as_deref(),
        Some("assets/images/vi/img_element-mb-zh.svg")
    );
    assert_eq!(source.fetches(LocaleCode::Zh), 1);
    assert_eq!(source.fetches(LocaleCode::En), 1);
    Ok(())
}

#[tokio::test]
async fn switching_to_active_locale_is_a_no_op() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = started(&source).await?;
    let writes_before = page(&localizer).subtree_writes();

    let outcome = localizer.request_switch(LocaleCode::Zh).await;

    assert_eq!(outcome, SwitchOutcome::AlreadyActive);
    assert!(localizer.host().pauses().is_empty());
    assert_eq!(page(&localizer).subtree_writes(), writes_before);
    assert_eq!(source.calls(), [LocaleCode::Zh]);
    Ok(())
}

#[tokio::test]
async fn concurrent_request_is_dropped_while_busy() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = started(&source).await?;
    let gate = source.gate();

    let (first, second) = tokio::join!(localizer.request_switch(LocaleCode::En), async {
        tokio::task::yield_now().await;
        assert!(localizer.is_busy());
        assert!(page(&localizer).expect(TRIGGER).has_attribute("disabled"));
        let outcome = localizer.request_switch(LocaleCode::En).await;
        gate.notify_one();
        outcome
    });

    assert_eq!(first, SwitchOutcome::Switched(LocaleCode::En));
    assert_eq!(second, SwitchOutcome::Busy);
    assert_eq!(source.fetches(LocaleCode::En), 1);
    assert_eq!(localizer.host().pauses().len(), 1);
    assert!(!localizer.is_busy());
    assert!(!page(&localizer).expect(TRIGGER).has_attribute("disabled"));
    Ok(())
}

#[tokio::test]
async fn failed_fetch_leaves_page_and_state_untouched() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    source.fail_status(LocaleCode::En, 500);
    let localizer = started(&source).await?;
    let writes_before = page(&localizer).subtree_writes();

    let outcome = localizer.request_switch(LocaleCode::En).await;

    assert_eq!(outcome, SwitchOutcome::Failed);
    assert_eq!(localizer.current(), LocaleCode::Zh);
    assert!(!localizer.is_busy());
    assert!(localizer.host().pauses().is_empty());
    let page = page(&localizer);
    assert_eq!(page.attribute("lang").as_deref(), Some("zh-TW"));
    assert_eq!(page.content_of(TRIGGER), "EN");
    assert!(!page.expect(TRIGGER).has_attribute("disabled"));
    // Only the trigger's disable/enable pair was written.
    assert_eq!(page.subtree_writes(), writes_before + 2);

    // Failures are not cached; the next request fetches again.
    source.serve(LocaleCode::En, en_dictionary());
    assert_eq!(
        localizer.request_switch(LocaleCode::En).await,
        SwitchOutcome::Switched(LocaleCode::En)
    );
    assert_eq!(source.fetches(LocaleCode::En), 2);
    Ok(())
}

#[tokio::test]
async fn network_failure_is_reported_as_failed() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    source.fail_network(LocaleCode::En, "connection reset");
    let localizer = started(&source).await?;

    assert_eq!(localizer.toggle().await, SwitchOutcome::Failed);
    assert_eq!(localizer.current(), LocaleCode::Zh);
    assert!(!localizer.cache().contains(LocaleCode::En));
    Ok(())
}

#[tokio::test]
async fn missing_sections_leave_their_regions_alone() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    source.serve(
        LocaleCode::En,
        without_sections(en_dictionary(), &["news", "contact"]),
    );
    let localizer = started(&source).await?;
    let page = page(&localizer);
    let zh_slides = page.content_of(".cardsSwiper--news .swiper-wrapper");
    localizer.host().clear_carousels();

    assert_eq!(
        localizer.request_switch(LocaleCode::En).await,
        SwitchOutcome::Switched(LocaleCode::En)
    );

    assert_eq!(page.content_of("#news .f-section-title"), "最新消息");
    assert_eq!(page.content_of(".cardsSwiper--news .swiper-wrapper"), zh_slides);
    assert_eq!(page.content_of(".department"), "主辦單位");
    assert_eq!(page.content_of("#event .f-section-title"), "Events");
    assert_eq!(page.content_of("#style .f-section-title"), "Style");

    let rebuilt: Vec<CarouselKind> = localizer
        .host()
        .carousels()
        .iter()
        .map(CarouselPlan::kind)
        .collect();
    assert_eq!(rebuilt, [CarouselKind::Event]);

    let dictionary = localizer.active_dictionary();
    let report = dictionary
        .map(|dictionary| localizer.rebind(&dictionary))
        .map(|report| report.missing().collect::<Vec<_>>());
    assert_eq!(report, Some(vec![Section::News, Section::Contact]));
    Ok(())
}

#[tokio::test]
async fn empty_and_malformed_values_are_skipped() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let mut en = en_dictionary();
    en["opening"]["introTexts"] = serde_json::json!(["", "Second line"]);
    en["style"]["title"] = serde_json::json!(42);
    en["about"] = serde_json::json!("not an object");
    source.serve(LocaleCode::En, en);
    let localizer = started(&source).await?;

    localizer.request_switch(LocaleCode::En).await;

    let page = page(&localizer);
    assert_eq!(page.contents_of(".intro__text"), ["山海之間", "Second line"]);
    assert_eq!(page.content_of("#style .f-section-title"), "風格");
    assert_eq!(page.content_of("#aboutGroup1 .sectionGroup__title"), "緣起");
    assert_eq!(page.content_of(".hint__text"), "Tap an icon");
    Ok(())
}

#[tokio::test]
async fn empty_feature_value_keeps_previous_copy() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let mut en = en_dictionary();
    en["preview"]["features"]["feature2"] = serde_json::json!("");
    source.serve(LocaleCode::En, en);
    let localizer = started(&source).await?;
    let hook = r#"[data-json-key="feature2"]"#;
    assert_eq!(page(&localizer).expect(hook).content(), "手作體驗");

    localizer.request_switch(LocaleCode::En).await;

    assert_eq!(localizer.current(), LocaleCode::En);
    assert_eq!(page(&localizer).expect(hook).content(), "手作體驗");
    Ok(())
}

#[tokio::test]
async fn preload_warms_cache_without_touching_page() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = started(&source).await?;
    let writes_before = page(&localizer).subtree_writes();

    assert!(localizer.preload(LocaleCode::En).await);
    assert_eq!(page(&localizer).subtree_writes(), writes_before);
    assert_eq!(localizer.current(), LocaleCode::Zh);

    localizer.request_switch(LocaleCode::En).await;
    assert_eq!(source.fetches(LocaleCode::En), 1);
    Ok(())
}

#[tokio::test]
async fn failed_preload_is_not_retried() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    source.fail_network(LocaleCode::En, "offline");
    let localizer = started(&source).await?;

    assert!(!localizer.preload(LocaleCode::En).await);
    assert_eq!(source.fetches(LocaleCode::En), 1);
    assert!(localizer.cache().get(LocaleCode::En).is_none());
    Ok(())
}

#[tokio::test]
async fn cache_hands_out_one_shared_dictionary() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = localizer(&source);

    let first = localizer.cache().load(LocaleCode::En).await?;
    let second = localizer.cache().load(LocaleCode::En).await?;

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(source.fetches(LocaleCode::En), 1);
    assert_eq!(localizer.cache().len(), 1);
    Ok(())
}

#[tokio::test]
async fn carousels_follow_viewport_width() -> anyhow::Result<()> {
    let source = Rc::new(ScriptedSource::bilingual());
    let localizer = started(&source).await?;
    let host = localizer.host();

    let kinds: Vec<CarouselKind> = host.carousels().iter().map(CarouselPlan::kind).collect();
    assert_eq!(kinds, [CarouselKind::News, CarouselKind::Event]);
    assert!(
        host.carousels()
            .iter()
            .all(|plan| matches!(plan, CarouselPlan::Rebuild { .. }))
    );

    host.clear_carousels();
    host.resize(559);
    localizer.refresh_carousels();
    assert_eq!(
        host.carousels(),
        [
            CarouselPlan::Disable {
                kind: CarouselKind::News
            },
            CarouselPlan::Disable {
                kind: CarouselKind::Event
            },
        ]
    );

    host.clear_carousels();
    host.resize(560);
    localizer.request_switch(LocaleCode::En).await;
    assert_eq!(
        host.carousels(),
        [
            CarouselPlan::for_width(CarouselKind::News, 560, 560),
            CarouselPlan::for_width(CarouselKind::Event, 560, 560),
        ]
    );
    assert!(matches!(host.carousels()[0], CarouselPlan::Rebuild { .. }));
    Ok(())
}

#[test]
fn fixture_dictionaries_carry_every_section() -> anyhow::Result<()> {
    for (locale, document) in [
        (LocaleCode::Zh, zh_dictionary()),
        (LocaleCode::En, en_dictionary()),
    ] {
        let dictionary = LocaleDictionary::from_value(locale, document)?;
        for section in Section::ORDER {
            assert!(dictionary.has_section(section.key()), "{locale} lacks {}", section.key());
        }
    }
    Ok(())
}
