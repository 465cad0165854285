//! Organize page — record per-category item counts.

#[cfg(test)]
#[path = "organize_test.rs"]
mod organize_test;

use leptos::prelude::*;

use crate::net::types::DigitalSnapshot;
use crate::state::declutter::DeclutterState;

fn parse_count(raw: &str) -> Result<i64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<i64>() {
        Ok(count) if count >= 0 => Ok(count),
        _ => Err("Counts must be whole non-negative numbers."),
    }
}

fn parse_snapshot(fields: [&str; 6]) -> Result<DigitalSnapshot, &'static str> {
    let [photos, videos, apps, emails, files, downloads] = fields;
    Ok(DigitalSnapshot {
        photos: parse_count(photos)?,
        videos: parse_count(videos)?,
        apps: parse_count(apps)?,
        emails: parse_count(emails)?,
        files: parse_count(files)?,
        downloads: parse_count(downloads)?,
    })
}

#[component]
fn CountField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="count-field">
            <span>{label}</span>
            <input
                class="count-field__input"
                type="number"
                min="0"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn OrganizePage() -> impl IntoView {
    let declutter = expect_context::<RwSignal<DeclutterState>>();
    let photos = RwSignal::new(String::new());
    let videos = RwSignal::new(String::new());
    let apps = RwSignal::new(String::new());
    let emails = RwSignal::new(String::new());
    let files = RwSignal::new(String::new());
    let downloads = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Seed the form from the already-fetched snapshot, once.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        if let Some(snapshot) = declutter.get().snapshot {
            photos.set(snapshot.photos.to_string());
            videos.set(snapshot.videos.to_string());
            apps.set(snapshot.apps.to_string());
            emails.set(snapshot.emails.to_string());
            files.set(snapshot.files.to_string());
            downloads.set(snapshot.downloads.to_string());
            seeded.set(true);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if declutter.get().save_pending {
            return;
        }
        let parsed = parse_snapshot([
            &photos.get(),
            &videos.get(),
            &apps.get(),
            &emails.get(),
            &files.get(),
            &downloads.get(),
        ]);
        let snapshot = match parsed {
            Ok(snapshot) => snapshot,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        declutter.update(|s| s.save_pending = true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_snapshot(&snapshot).await {
                Ok(()) => {
                    declutter.update(|s| {
                        s.snapshot = Some(snapshot);
                        s.save_pending = false;
                    });
                    info.set("Saved.".to_owned());
                }
                Err(e) => {
                    declutter.update(|s| s.save_pending = false);
                    info.set(format!("Save failed: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = snapshot;
        }
    };

    view! {
        <div class="organize">
            <h1>"Your digital footprint"</h1>
            <form class="organize__form" on:submit=on_save>
                <CountField label="Photos" value=photos/>
                <CountField label="Videos" value=videos/>
                <CountField label="Apps" value=apps/>
                <CountField label="Emails" value=emails/>
                <CountField label="Files" value=files/>
                <CountField label="Downloads" value=downloads/>
                <button class="organize__save" type="submit">"Save snapshot"</button>
            </form>
            <p class="organize__info">{move || info.get()}</p>
        </div>
    }
}
