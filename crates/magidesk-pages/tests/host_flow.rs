//! Host orchestration flows against the in-memory backend and scripted
//! dialogs.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use magidesk_client::InMemorySettingsStore;
use magidesk_pages::{
    DialogSurface, GeneralSettingsPage, SaveOutcome, SettingsHost, SettingsSubPage,
    resolve_sub_page,
};
use magidesk_settings::SettingsPayload;
use magidesk_test_support::{DialogEvent, ScriptedDialogs, fixtures, init_test_logging};

fn host_over(
    store: Arc<InMemorySettingsStore>,
    dialogs: Arc<ScriptedDialogs>,
) -> SettingsHost {
    init_test_logging();
    SettingsHost::new(store, dialogs)
}

#[tokio::test]
async fn open_loads_the_stored_document() {
    let store = Arc::new(
        InMemorySettingsStore::new().with_payload(SettingsPayload::Pos(fixtures::sample_pos())),
    );
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let opened = host.open("pos.tax").await;

    assert!(opened.loaded);
    assert_eq!(opened.descriptor.title, "Point of Sale");
    assert_eq!(
        opened.page.current_settings(),
        SettingsPayload::Pos(fixtures::sample_pos())
    );
    assert!(dialogs.events().is_empty());
}

#[tokio::test]
async fn open_reports_a_failed_load_and_keeps_defaults() {
    let store = Arc::new(InMemorySettingsStore::new());
    store.fail_next_load();
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let opened = host.open("general").await;

    assert!(!opened.loaded);
    let (title, message) = dialogs.last_error().expect("load failure must be reported");
    assert_eq!(title, "Load failed");
    assert!(message.contains("unavailable"));
    assert_eq!(
        opened.page.current_settings(),
        SettingsPayload::default_for("general")
    );
}

#[tokio::test]
async fn open_of_unknown_category_falls_back_to_the_placeholder() {
    let store = Arc::new(InMemorySettingsStore::new());
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(store, dialogs);

    let opened = host.open("loyalty").await;

    assert!(opened.loaded);
    assert!(opened.page.is_stub());
    assert_eq!(opened.descriptor.title, "Settings");
    assert_eq!(
        opened.page.current_settings(),
        SettingsPayload::default_for("loyalty")
    );
}

#[tokio::test]
async fn save_persists_the_collected_document() {
    let store = Arc::new(InMemorySettingsStore::new());
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut page = GeneralSettingsPage::new();
    page.set_settings(&SettingsPayload::General(fixtures::sample_general()));
    page.business_name.set_text("La Magia Norte");

    let outcome = host.save(&mut page).await;

    assert_eq!(outcome, SaveOutcome::Saved);
    let stored = store.stored("general").await.expect("document was saved");
    let SettingsPayload::General(stored) = stored else {
        panic!("stored document must stay a general payload");
    };
    assert_eq!(stored.business_name, "La Magia Norte");
    assert_eq!(stored.receipt_copies, 2);
}

#[tokio::test]
async fn declined_confirmation_cancels_the_save() {
    let store = Arc::new(InMemorySettingsStore::new());
    let dialogs = Arc::new(ScriptedDialogs::new());
    dialogs.push_answer(false);
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut page = GeneralSettingsPage::new();
    let outcome = host.save(&mut page).await;

    assert_eq!(outcome, SaveOutcome::Cancelled);
    assert!(store.stored("general").await.is_none());
    assert_eq!(
        dialogs.events(),
        vec![DialogEvent::Confirm {
            title: "Save settings".to_string(),
            message: "Apply these settings?".to_string(),
            answer: false,
        }]
    );
}

#[tokio::test]
async fn invalid_document_is_reported_and_not_persisted() {
    let store = Arc::new(InMemorySettingsStore::new());
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut page = GeneralSettingsPage::new();
    page.set_settings(&SettingsPayload::General(fixtures::sample_general()));
    page.receipt_copies.set_text("9");

    let outcome = host.save(&mut page).await;

    assert_eq!(outcome, SaveOutcome::Invalid);
    let (title, message) = dialogs.last_error().expect("validation must be reported");
    assert_eq!(title, "Invalid settings");
    assert!(message.contains("receipt_copies"));
    assert!(store.stored("general").await.is_none());
}

#[tokio::test]
async fn backend_failure_rejects_the_save_and_keeps_page_values() {
    let store = Arc::new(InMemorySettingsStore::new());
    store.fail_next_save();
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut page = GeneralSettingsPage::new();
    page.set_settings(&SettingsPayload::General(fixtures::sample_general()));
    page.business_name.set_text("La Magia Sur");

    let outcome = host.save(&mut page).await;

    assert_eq!(outcome, SaveOutcome::Rejected);
    let (title, _) = dialogs.last_error().expect("failure must be reported");
    assert_eq!(title, "Save failed");
    assert!(store.stored("general").await.is_none());
    assert_eq!(page.business_name.text(), "La Magia Sur");
}

#[tokio::test]
async fn backend_decline_is_reported_as_a_rejection() {
    let store = Arc::new(InMemorySettingsStore::new());
    store.decline_next_save();
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut page = GeneralSettingsPage::new();
    let outcome = host.save(&mut page).await;

    assert_eq!(outcome, SaveOutcome::Rejected);
    let (title, message) = dialogs.last_error().expect("decline must be reported");
    assert_eq!(title, "Save rejected");
    assert!(message.contains("declined"));
}

#[tokio::test]
async fn placeholder_page_save_skips_persistence() {
    let store = Arc::new(InMemorySettingsStore::new());
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut opened = host.open("printers").await;
    let outcome = host.save(opened.page.as_mut()).await;

    assert_eq!(outcome, SaveOutcome::Saved);
    assert!(store.stored("printers").await.is_none());
}

#[tokio::test]
async fn reset_reloads_the_stored_document() {
    let store = Arc::new(
        InMemorySettingsStore::new()
            .with_payload(SettingsPayload::General(fixtures::sample_general())),
    );
    let dialogs = Arc::new(ScriptedDialogs::new());
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut page = GeneralSettingsPage::new();
    page.set_settings(&SettingsPayload::General(fixtures::sample_general()));
    page.business_name.set_text("scratch edits");

    assert!(host.reset(&mut page).await);
    assert_eq!(page.business_name.text(), "La Magia Cantina");
}

#[tokio::test]
async fn declined_reset_keeps_the_edits() {
    let store = Arc::new(
        InMemorySettingsStore::new()
            .with_payload(SettingsPayload::General(fixtures::sample_general())),
    );
    let dialogs = Arc::new(ScriptedDialogs::new());
    dialogs.push_answer(false);
    let host = host_over(Arc::clone(&store), Arc::clone(&dialogs));

    let mut page = GeneralSettingsPage::new();
    page.set_settings(&SettingsPayload::General(fixtures::sample_general()));
    page.business_name.set_text("scratch edits");

    assert!(!host.reset(&mut page).await);
    assert_eq!(page.business_name.text(), "scratch edits");
}

/// Dialog surface whose confirmation blocks until the test releases it.
struct BlockingDialogs {
    release: Arc<Semaphore>,
}

#[async_trait]
impl DialogSurface for BlockingDialogs {
    async fn confirm(&self, _title: &str, _message: &str) -> bool {
        let permit = self.release.acquire().await.expect("semaphore open");
        permit.forget();
        true
    }

    async fn show_error(&self, _title: &str, _message: &str) {}
}

#[tokio::test]
async fn concurrent_save_reports_busy() {
    init_test_logging();
    let store = Arc::new(InMemorySettingsStore::new());
    let release = Arc::new(Semaphore::new(0));
    let dialogs = Arc::new(BlockingDialogs {
        release: Arc::clone(&release),
    });
    let host = SettingsHost::new(Arc::<InMemorySettingsStore>::clone(&store), dialogs);

    let mut first = GeneralSettingsPage::new();
    first.set_settings(&SettingsPayload::General(fixtures::sample_general()));
    let mut second = resolve_sub_page("general");

    // The first save parks on its confirmation; the second must bounce off
    // the gate before the release below lets the first one finish.
    let (first_outcome, second_outcome) = tokio::join!(host.save(&mut first), async {
        let outcome = host.save(second.as_mut()).await;
        release.add_permits(1);
        outcome
    });

    assert_eq!(first_outcome, SaveOutcome::Saved);
    assert_eq!(second_outcome, SaveOutcome::Busy);
    assert!(store.stored("general").await.is_some());
}
