use leptos::prelude::*;

/// 分页按钮组；只有一页时不显示
#[component]
pub fn PageControls(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 1 }>
            <div class="flex justify-center p-4">
                <div class="join">
                    <button
                        class="join-item btn btn-sm"
                        disabled=move || current.get() <= 1
                        on:click=move |_| on_select.run(current.get_untracked().saturating_sub(1))
                    >
                        "«"
                    </button>
                    {move || {
                        (1..=count.get())
                            .map(|page| {
                                let class = if page == current.get() {
                                    "join-item btn btn-sm btn-active"
                                } else {
                                    "join-item btn btn-sm"
                                };
                                view! {
                                    <button class=class on:click=move |_| on_select.run(page)>
                                        {page}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="join-item btn btn-sm"
                        disabled=move || current.get() >= count.get()
                        on:click=move |_| on_select.run(current.get_untracked() + 1)
                    >
                        "»"
                    </button>
                </div>
            </div>
        </Show>
    }
}
