use chrono::Datelike;
use consts::social;
use leptos::prelude::*;
use leptos_icons::*;

#[component]
fn SocialLink(href: &'static str, label: &'static str, icon: icondata::Icon) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-1.5 text-sm text-sky-100 hover:text-white"
        >
            <Icon icon />
            <span>{label}</span>
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="mt-16 bg-sky-900 text-sky-100">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4 px-4 py-6">
                <div class="flex items-center gap-3 text-sm">
                    <Icon icon=icondata::FiUsers />
                    <span>{format!("© {year} Apu Das Orgho")}</span>
                    <span class="hidden md:inline h-4 w-px bg-sky-700" />
                    <span>"Built for AUST students"</span>
                </div>
                <div class="flex items-center gap-5">
                    <SocialLink href=social::FACEBOOK label="Facebook" icon=icondata::FiFacebook />
                    <SocialLink href=social::GITHUB label="Github" icon=icondata::FiGithub />
                    <SocialLink href=social::LINKEDIN label="Linkedin" icon=icondata::FiLinkedin />
                    <div class="flex items-center gap-1.5 text-xs">
                        <span class="w-2 h-2 rounded-full bg-emerald-400" />
                        "Online"
                    </div>
                </div>
            </div>
        </footer>
    }
}
