use yew::prelude::*;

use super::icons::{icon_bar_chart, icon_credit_card, icon_trending_up, icon_wallet};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Wallet,
    CreditCard,
    TrendingUp,
    BarChart,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let icon = match props.icon {
        StatIcon::Wallet => icon_wallet(),
        StatIcon::CreditCard => icon_credit_card(),
        StatIcon::TrendingUp => icon_trending_up(),
        StatIcon::BarChart => icon_bar_chart(),
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <div class="flex items-center justify-between mb-2">
                <p class="text-sm text-muted-foreground">{ props.title }</p>
                <span class="text-muted-foreground">{ icon }</span>
            </div>
            <p class="text-2xl font-bold text-foreground">{ props.value.clone() }</p>
        </div>
    }
}
