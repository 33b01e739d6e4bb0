use leptos::prelude::*;

use crate::components::infinity_logo::InfinityLogo;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (blocks, set_blocks) = signal(0u64);
	let (pulse, set_pulse) = signal(0u32);
	let on_new_block = Callback::new(move |_: ()| set_blocks.update(|n| *n += 1));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="logo-header">
				<InfinityLogo on_new_block=on_new_block pulse=pulse />
				<div class="logo-overlay">
					<h1>"Block Explorer"</h1>
					<p class="subtitle">"Blocks seen: " {move || blocks.get()}</p>
					<button on:click=move |_| set_pulse.update(|n| *n = n.wrapping_add(1))>
						"Simulate block"
					</button>
				</div>
			</div>
		</ErrorBoundary>
	}
}
