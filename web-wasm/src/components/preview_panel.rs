//! プレビューコンポーネント

use leptos::prelude::*;
use skinai_common::PreviewView;

#[component]
pub fn PreviewPanel<FA, FR>(
    preview: PreviewView,
    busy: RwSignal<bool>,
    on_analyze: FA,
    on_remove: FR,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let name_line = preview.name_line();
    let size_line = preview.size_line();

    view! {
        <div class="preview-area animate-fade-up">
            <div class="preview-image">
                <img src=preview.data_url alt="Selected image preview" />
            </div>
            <div class="preview-info">
                <p class="file-name">{name_line}</p>
                <p class="file-size">{size_line}</p>
            </div>
            <div class="preview-actions">
                <button
                    class="btn btn-primary analyze-btn"
                    disabled=move || busy.get()
                    on:click={
                        let on_analyze = on_analyze.clone();
                        move |_| on_analyze(())
                    }
                >
                    <Show
                        when=move || busy.get()
                        fallback=|| view! { <span>"Analyze Image"</span> }
                    >
                        <div class="analyze-loader"></div>
                    </Show>
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_remove = on_remove.clone();
                        move |_| on_remove(())
                    }
                >
                    <i class="fas fa-trash"></i>
                    "Remove"
                </button>
            </div>
        </div>
    }
}
