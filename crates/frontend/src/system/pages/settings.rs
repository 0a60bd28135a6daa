use contracts::domain::a001_medicine::low_stock::DEFAULT_STATUS_THRESHOLD;
use contracts::shared::alert::AlertInfo;
use contracts::system::settings::{
    save_failed_alert, AlertType, Channel, NotificationSettings, SettingsError, SettingsUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::{AlertBanner, PageHeader};
use crate::shared::data::use_api;
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

const CONTACT_EMAIL: &str = "admin@pharmiq.com";
const CONTACT_MOBILE: &str = "+91 98765 43210";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();

    let pharmacy_name = RwSignal::new("PharmaIQ Central".to_string());
    let stock_threshold = RwSignal::new(DEFAULT_STATUS_THRESHOLD);
    let auto_sync = RwSignal::new(true);
    let sync_time = RwSignal::new("02:00".to_string());
    let notifications = RwSignal::new(NotificationSettings::default());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let saving = RwSignal::new(false);
    let alert = RwSignal::new(Option::<AlertInfo>::None);

    let save = Callback::new(move |update: Result<SettingsUpdate, SettingsError>| {
        alert.set(None);
        let update = match update {
            Ok(update) => update,
            Err(e) => {
                alert.set(Some(e.to_alert()));
                return;
            }
        };
        let section = update.section();
        match &update {
            SettingsUpdate::Password { .. } => log::info!("Saving settings: password change"),
            other => log::info!("Saving settings: {:?}", other),
        }

        saving.set(true);
        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api.update_settings(update).await;
            guard.run(|| {
                saving.set(false);
                alert.set(Some(match result {
                    Ok(_) => section.success_alert(),
                    Err(e) => {
                        log::error!("Failed to save settings: {}", e);
                        save_failed_alert()
                    }
                }));
            });
        });
    });

    let button_text = move |label: &'static str| {
        move || if saving.get() { "Saving..." } else { label }
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM class="settings">
            <PageHeader title="Settings" />
            <AlertBanner alert=alert on_close=move |_| alert.set(None) />

            <section class="card">
                <h2 class="card__title">"General Settings"</h2>
                <div class="form-group">
                    <Label>"Pharmacy Name"</Label>
                    <Input value=pharmacy_name />
                </div>
                <div class="form-group">
                    <Label>"Stock Alert Threshold"</Label>
                    <input
                        type="number"
                        min="0"
                        class="form-input"
                        prop:value=move || stock_threshold.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                stock_threshold.set(value);
                            }
                        }
                    />
                </div>
                <div class="card__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| save.run(Ok(SettingsUpdate::General {
                            pharmacy_name: pharmacy_name.get(),
                            stock_threshold: stock_threshold.get(),
                        }))
                    >
                        {button_text("Save General Settings")}
                    </Button>
                </div>
            </section>

            <section class="card">
                <h2 class="card__title">"Automated Sync"</h2>
                <div class="settings__row">
                    <div>
                        <p class="settings__row-title">"Enable Daily Auto-Sync"</p>
                        <p class="text-muted">
                            "Automatically sync data from your ERP/POS once every 24 hours."
                        </p>
                    </div>
                    <Switch checked=auto_sync />
                </div>
                <Show when=move || auto_sync.get()>
                    <div class="form-group">
                        <Label>"Sync Time"</Label>
                        <input
                            type="time"
                            class="form-input"
                            prop:value=move || sync_time.get()
                            on:input=move |ev| sync_time.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
                <p class="text-muted">"Last synced: 3 hours ago"</p>
                <div class="card__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| save.run(Ok(SettingsUpdate::Sync {
                            auto_sync: auto_sync.get(),
                            sync_time: sync_time.get(),
                        }))
                    >
                        {button_text("Save Sync Settings")}
                    </Button>
                </div>
            </section>

            <section class="card">
                <h2 class="card__title">"Notifications & Alerts"</h2>
                <p class="text-muted">
                    "Alerts will be sent to "
                    <strong>{CONTACT_EMAIL}</strong>
                    " "
                    <span class="text-success">"(Verified)"</span>
                    " and "
                    <strong>{CONTACT_MOBILE}</strong>
                    " "
                    <span class="text-success">"(Verified)"</span>
                    "."
                </p>
                <table class="simple-table">
                    <thead>
                        <tr>
                            <th>"Alert Type"</th>
                            <th class="text-center">"Email"</th>
                            <th class="text-center">"WhatsApp"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {AlertType::ALL
                            .into_iter()
                            .map(|row| {
                                let cell = move |channel: Channel| {
                                    view! {
                                        <td class="text-center">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    notifications.with(|n| n.is_enabled(row, channel))
                                                }
                                                on:change=move |_| {
                                                    notifications.update(|n| n.toggle(row, channel))
                                                }
                                            />
                                        </td>
                                    }
                                };
                                view! {
                                    <tr>
                                        <td>{row.label()}</td>
                                        {cell(Channel::Email)}
                                        {cell(Channel::WhatsApp)}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <div class="card__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| save.run(Ok(SettingsUpdate::Notifications(notifications.get())))
                    >
                        {button_text("Save Notification Settings")}
                    </Button>
                </div>
            </section>

            <section class="card">
                <h2 class="card__title">"Change Password"</h2>
                <div class="form-stack">
                    <input
                        type="password"
                        class="form-input"
                        placeholder="Current Password"
                        prop:value=move || current_password.get()
                        on:input=move |ev| current_password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="form-input"
                        placeholder="New Password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="form-input"
                        placeholder="Confirm New Password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </div>
                <div class="card__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| save.run(SettingsUpdate::password_change(
                            &current_password.get(),
                            &new_password.get(),
                            &confirm_password.get(),
                        ))
                    >
                        {button_text("Update Password")}
                    </Button>
                </div>
            </section>
        </PageFrame>
    }
}
