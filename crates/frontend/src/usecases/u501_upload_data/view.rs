use contracts::shared::alert::AlertInfo;
use contracts::usecases::u501_upload_data::erp::ErpProvider;
use contracts::usecases::u501_upload_data::preview::{next_progress, parse_preview, PreviewRow};
use contracts::usecases::u501_upload_data::request::{
    no_file_alert, upload_failed_alert, upload_success_alert,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thaw::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::shared::components::{AlertBanner, PageHeader};
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

const PROGRESS_TICK_MS: u32 = 200;
/// How long the finished progress bar stays visible.
const PROGRESS_LINGER_MS: u32 = 1_000;
const NO_PROVIDER: &str = "none";

async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string()
        .ok_or_else(|| "File content is not text".to_string())
}

fn preview_table(rows: Vec<PreviewRow>) -> impl IntoView {
    view! {
        <div class="upload__preview">
            <h3>"Preview Table"</h3>
            <p class="text-muted">"Showing first 5 rows. Scroll right to see all columns."</p>
            <div class="table-wrapper">
                <table class="simple-table">
                    <thead>
                        <tr>
                            <th>"name"</th>
                            <th>"batch"</th>
                            <th>"stock"</th>
                            <th>"price"</th>
                            <th>"expiry"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td class="nowrap">{row.name}</td>
                                    <td>{row.batch}</td>
                                    <td>{row.stock}</td>
                                    <td>{row.price}</td>
                                    <td class="nowrap">{row.expiry}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ErpConnectForm(alert: RwSignal<Option<AlertInfo>>) -> impl IntoView {
    let provider_key = RwSignal::new(NO_PROVIDER.to_string());
    let provider = Memo::new(move |_| ErpProvider::from_key(&provider_key.get()));

    view! {
        <section class="card">
            <h2 class="card__title">"Connect ERP/POS"</h2>
            <p class="text-muted">"Select your provider to sync data automatically."</p>
            <form
                class="form-stack"
                on:submit=move |ev| {
                    ev.prevent_default();
                    if let Some(p) = provider.get_untracked() {
                        log::info!("ERP connect requested for {}", p.key());
                        alert.set(Some(p.connect_alert()));
                    }
                }
            >
                <div class="form-group">
                    <Label>"Select your ERP/POS Provider"</Label>
                    <Select value=provider_key>
                        <option value=NO_PROVIDER>"Select a Provider"</option>
                        {ErpProvider::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.key()>{p.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                {move || match provider.get() {
                    None => view! {
                        <p class="text-muted text-center">
                            "Please select a provider to see connection options."
                        </p>
                    }
                    .into_any(),
                    Some(p) => view! {
                        {p.credential_fields()
                            .iter()
                            .map(|field| {
                                let input_type = if field.secret { "password" } else { "text" };
                                view! {
                                <div class="form-group">
                                    <label for=field.id class="form-label">{field.label}</label>
                                    <input
                                        id=field.id
                                        name=field.id
                                        class="form-input"
                                        type=input_type
                                        placeholder=field.placeholder
                                    />
                                </div>
                                }
                            })
                            .collect_view()}
                        <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                            "Connect"
                        </Button>
                    }
                    .into_any(),
                }}
            </form>
        </section>
    }
}

#[component]
pub fn UploadDataPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();
    let alert = RwSignal::new(Option::<AlertInfo>::None);
    let file_name = RwSignal::new(Option::<String>::None);
    let preview = RwSignal::new(Vec::<PreviewRow>::new());
    let uploading = RwSignal::new(false);
    let progress = RwSignal::new(0u32);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let preview_guard = guard.clone();
    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        file_name.set(Some(file.name()));
        alert.set(None);
        let guard = preview_guard.clone();
        spawn_local(async move {
            match read_file_text(file).await {
                Ok(text) => guard.run(|| preview.set(parse_preview(&text))),
                Err(e) => log::error!("Failed to read CSV for preview: {}", e),
            }
        });
    };

    let upload = move |_: leptos::ev::MouseEvent| {
        let Some(name) = file_name.get_untracked() else {
            alert.set(Some(no_file_alert()));
            return;
        };
        uploading.set(true);
        alert.set(None);
        progress.set(0);

        let ticking = Arc::new(AtomicBool::new(true));
        let ticker = ticking.clone();
        let ticker_guard = guard.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(PROGRESS_TICK_MS).await;
                if !ticker.load(Ordering::Relaxed) || !ticker_guard.is_mounted() {
                    break;
                }
                progress.update(|p| *p = next_progress(*p));
            }
        });

        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api.upload(name).await;
            ticking.store(false, Ordering::Relaxed);
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(response) => {
                    progress.set(100);
                    alert.set(Some(upload_success_alert(&response.message)));
                    file_name.set(None);
                    preview.set(Vec::new());
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    alert.set(Some(upload_failed_alert()));
                }
            }
            TimeoutFuture::new(PROGRESS_LINGER_MS).await;
            guard.run(|| uploading.set(false));
        });
    };

    view! {
        <PageFrame page_id="u501_upload_data--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title="Data Integration" />
            <AlertBanner alert=alert on_close=move |_| alert.set(None) />

            <div class="grid grid--2">
                <section class="card">
                    <h2 class="card__title">"Upload CSV File"</h2>
                    <p class="text-muted">"Upload a CSV file with columns: name, batch, stock, price, expiry."</p>

                    <div class="upload__dropzone">
                        <span class="upload__icon">{icon("upload")}</span>
                        <label for="file-upload" class="upload__label">
                            {move || file_name.get().unwrap_or_else(|| "Select a file".to_string())}
                        </label>
                        <input
                            id="file-upload"
                            name="file-upload"
                            type="file"
                            accept=".csv"
                            class="sr-only"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                        <p class="text-muted">"CSV up to 10MB"</p>
                    </div>

                    {move || {
                        let rows = preview.get();
                        (!rows.is_empty()).then(|| preview_table(rows))
                    }}

                    <Show when=move || uploading.get()>
                        <div class="progress">
                            <div class="progress__bar" style:width=move || format!("{}%", progress.get())></div>
                        </div>
                    </Show>

                    <Button
                        appearance=ButtonAppearance::Primary
                        class="upload__submit"
                        disabled=Signal::derive(move || uploading.get())
                        on_click=upload
                    >
                        {move || {
                            if uploading.get() {
                                format!("Uploading... {}%", progress.get())
                            } else {
                                "Save to Database".to_string()
                            }
                        }}
                    </Button>
                </section>

                <ErpConnectForm alert=alert />
            </div>
        </PageFrame>
    }
}
