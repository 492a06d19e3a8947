use dioxus::prelude::*;

/// Page controls: previous, one control per page index, next. Previous
/// is disabled on the first page, next on the last.
#[component]
pub fn Pagination(current_page: u32, total_pages: u32, on_page: EventHandler<u32>) -> Element {
    if total_pages == 0 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "page-control",
                disabled: current_page == 0,
                onclick: move |_| {
                    if current_page > 0 {
                        on_page.call(current_page - 1);
                    }
                },
                "Previous"
            }
            for page in 0..total_pages {
                button {
                    class: if page == current_page { "page-control current" } else { "page-control" },
                    onclick: move |_| on_page.call(page),
                    "{page + 1}"
                }
            }
            button {
                class: "page-control",
                disabled: current_page + 1 >= total_pages,
                onclick: move |_| {
                    if current_page + 1 < total_pages {
                        on_page.call(current_page + 1);
                    }
                },
                "Next"
            }
        }
    }
}
