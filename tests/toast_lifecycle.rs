// SPDX-License-Identifier: MPL-2.0
use gobarber::ui::notifications::{
    ToastContainer, ToastContext, ToastDescriptor, ToastDuration, ToastKind, ToastOverlayMessage,
};
use std::time::Duration;

fn container(ctx: &ToastContext) -> ToastContainer {
    ToastContainer::new(ctx.clone(), ToastDuration::default().as_duration())
}

fn titles(overlay: &ToastContainer) -> Vec<String> {
    overlay
        .presenters()
        .map(|p| p.message().title().to_string())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn added_toast_is_displayed_with_its_content() {
    let ctx = ToastContext::new();
    let mut overlay = container(&ctx);

    ctx.add_toast(
        ToastDescriptor::error("Erro na autenticação")
            .description("Ocorreu um erro ao fazer login, cheque as credenciais."),
    );
    overlay.sync();

    let presenter = overlay.presenters().next().expect("toast mounted");
    assert_eq!(presenter.message().kind(), ToastKind::Error);
    assert_eq!(
        presenter.message().description(),
        Some("Ocorreu um erro ao fazer login, cheque as credenciais.")
    );
    assert!(presenter.is_timer_pending());
    assert!(overlay.is_active());
}

#[tokio::test(start_paused = true)]
async fn toast_disappears_after_three_seconds() {
    let ctx = ToastContext::new();
    let mut overlay = container(&ctx);

    ctx.add_toast(ToastDescriptor::success("Cadastro realizado!"));
    overlay.sync();

    tokio::time::sleep(Duration::from_millis(2999)).await;
    overlay.sync();
    assert_eq!(ctx.len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    overlay.sync();
    assert!(ctx.is_empty());
    assert!(!overlay.is_active());
}

#[tokio::test(start_paused = true)]
async fn dismiss_removes_toast_before_its_timer() {
    let ctx = ToastContext::new();
    let mut overlay = container(&ctx);

    let id = ctx.add_toast(ToastDescriptor::info("Informação"));
    overlay.sync();

    overlay.handle_message(ToastOverlayMessage::Dismiss(id.clone()));
    assert!(!ctx.contains(&id));
    assert_eq!(overlay.presenters().count(), 0);

    // The cancelled timer must not disturb a toast added afterwards.
    ctx.add_toast(ToastDescriptor::info("Outra"));
    overlay.sync();
    tokio::time::sleep(Duration::from_millis(3500)).await;
    overlay.sync();
    assert!(ctx.is_empty());
}

#[tokio::test(start_paused = true)]
async fn toasts_expire_independently_in_insertion_order() {
    let ctx = ToastContext::new();
    let mut overlay = container(&ctx);

    ctx.add_toast(ToastDescriptor::info("primeiro"));
    overlay.sync();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    ctx.add_toast(ToastDescriptor::success("segundo"));
    overlay.sync();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    ctx.add_toast(ToastDescriptor::error("terceiro"));
    overlay.sync();

    assert_eq!(titles(&overlay), ["primeiro", "segundo", "terceiro"]);

    // t = 3001ms: only the first one expired.
    tokio::time::sleep(Duration::from_millis(1001)).await;
    overlay.sync();
    assert_eq!(titles(&overlay), ["segundo", "terceiro"]);

    // t = 4001ms: the second one follows.
    tokio::time::sleep(Duration::from_millis(1000)).await;
    overlay.sync();
    assert_eq!(titles(&overlay), ["terceiro"]);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    overlay.sync();
    assert!(!overlay.is_active());
}

#[tokio::test(start_paused = true)]
async fn removing_one_toast_keeps_the_others_mounted() {
    let ctx = ToastContext::new();
    let mut overlay = container(&ctx);

    let first = ctx.add_toast(ToastDescriptor::info("a"));
    let second = ctx.add_toast(ToastDescriptor::info("b"));
    let third = ctx.add_toast(ToastDescriptor::info("c"));
    overlay.sync();

    overlay.handle_message(ToastOverlayMessage::Dismiss(second));
    assert_eq!(titles(&overlay), ["a", "c"]);

    let remaining: Vec<_> = overlay.presenters().map(|p| p.id().clone()).collect();
    assert_eq!(remaining, vec![first, third]);
    assert!(overlay.presenters().all(|p| p.is_timer_pending()));
}

#[tokio::test(start_paused = true)]
async fn configured_duration_is_honored() {
    let ctx = ToastContext::new();
    let mut overlay = ToastContainer::new(ctx.clone(), ToastDuration::from_millis(5000).as_duration());

    ctx.add_toast(ToastDescriptor::info("longo"));
    overlay.sync();

    tokio::time::sleep(Duration::from_millis(4000)).await;
    overlay.sync();
    assert_eq!(ctx.len(), 1);

    tokio::time::sleep(Duration::from_millis(1001)).await;
    overlay.sync();
    assert!(ctx.is_empty());
}
