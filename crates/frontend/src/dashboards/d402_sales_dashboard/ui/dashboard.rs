use std::collections::HashSet;

use contracts::dashboards::d402_sales_dashboard::{
    clamp_top_n, Region, RegionOption, SalesDashboardRequest, SalesDashboardResponse, SellerMeasure,
    TOP_SELLERS_DEFAULT, TOP_SELLERS_MAX, TOP_SELLERS_MIN, YEAR_MAX, YEAR_MIN,
};
use contracts::shared::format::formata_numero;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Flex, FlexAlign, FlexGap, MessageBar, MessageBarIntent, Spinner, Switch, Tab, TabList};

use super::chart_data::{
    category_bars, geo_points, location_bars, month_categories, monthly_series, seller_bars,
};
use crate::dashboards::d402_sales_dashboard::api;
use crate::shared::components::charts::{BarChart, GeoScatter, LineChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{MultiSelect, NumberInput, RangeSlider, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Revenue,
    Sales,
    Sellers,
}

impl DashboardTab {
    const ALL: [DashboardTab; 3] = [DashboardTab::Revenue, DashboardTab::Sales, DashboardTab::Sellers];

    fn value(&self) -> &'static str {
        match self {
            DashboardTab::Revenue => "revenue",
            DashboardTab::Sales => "sales",
            DashboardTab::Sellers => "sellers",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Revenue => "Receita",
            DashboardTab::Sales => "Quantidade de vendas",
            DashboardTab::Sellers => "Vendedores",
        }
    }

    fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .unwrap_or(DashboardTab::Revenue)
    }
}

fn default_region_options() -> Vec<RegionOption> {
    Region::ALL.into_iter().map(RegionOption::from).collect()
}

/// Selected sellers in a stable order for the request
fn sorted_sellers(selected: &HashSet<String>) -> Vec<String> {
    let mut sellers: Vec<String> = selected.iter().cloned().collect();
    sellers.sort();
    sellers
}

/// Derived view of the current response; empty while nothing is loaded
fn from_data<T>(
    data: ReadSignal<Option<SalesDashboardResponse>>,
    f: fn(&SalesDashboardResponse) -> T,
) -> Signal<T>
where
    T: Default + Send + Sync + 'static,
{
    Signal::derive(move || data.with(|d| d.as_ref().map(f).unwrap_or_default()))
}

/// Sales dashboard: sidebar filters, headline metrics and three chart tabs
#[component]
pub fn SalesDashboard() -> impl IntoView {
    // Filters
    let (region, set_region) = signal(Region::Brasil);
    let all_periods = RwSignal::new(true);
    let (year, set_year) = signal(YEAR_MAX);
    let selected_sellers = RwSignal::new(HashSet::<String>::new());
    let (top_n, set_top_n) = signal(TOP_SELLERS_DEFAULT);
    let (region_options, set_region_options) = signal(default_region_options());
    let selected_tab = RwSignal::new(DashboardTab::Revenue.value().to_string());

    // Data state
    let (data, set_data) = signal(None::<SalesDashboardResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let request_seq = StoredValue::new(0u64);

    // Load region list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_regions().await {
                Ok(options) if !options.is_empty() => set_region_options.set(options),
                Ok(_) => {}
                Err(err) => log::error!("Failed to load D402 regions: {}", err),
            }
        });
    });

    // Reload data whenever a filter changes
    Effect::new(move |_| {
        let request = SalesDashboardRequest {
            region: region.get(),
            year: if all_periods.get() { None } else { Some(year.get()) },
            sellers: selected_sellers.with(|s| sorted_sellers(s)),
        };

        request_seq.update_value(|seq| *seq += 1);
        let seq = request_seq.get_value();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_sales_dashboard(&request).await;
            // Ответ на устаревший запрос игнорируем
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load D402 sales dashboard: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let total_revenue = Signal::derive(move || {
        formata_numero(data.with(|d| d.as_ref().map_or(0.0, |d| d.total_revenue)), "R$")
    });
    let total_sales = Signal::derive(move || {
        formata_numero(data.with(|d| d.as_ref().map_or(0, |d| d.total_sales)) as f64, "")
    });
    let seller_options = from_data(data, |d| d.seller_options.clone());

    let metrics = move || {
        view! {
            <div class="dashboard__metrics">
                <StatCard label="Receita" value=total_revenue />
                <StatCard label="Qtde. Vendas" value=total_sales />
            </div>
        }
    };

    let revenue_tab = move || {
        view! {
            {metrics()}
            <div class="dashboard__columns">
                <div class="dashboard__column">
                    <GeoScatter
                        title="Receita por estado".to_string()
                        points=from_data(data, |d| geo_points(&d.revenue_by_location))
                    />
                    <BarChart
                        title="Top estados (receitas)".to_string()
                        bars=from_data(data, |d| location_bars(&d.top_states_by_revenue))
                        value_title="Receita".to_string()
                    />
                </div>
                <div class="dashboard__column">
                    <LineChart
                        title="Receita mensal".to_string()
                        categories=month_categories()
                        series=from_data(data, |d| monthly_series(&d.revenue_by_month))
                        value_title="Receita".to_string()
                    />
                    <BarChart
                        title="Receita por categoria".to_string()
                        bars=from_data(data, |d| category_bars(&d.revenue_by_category))
                        value_title="Receita".to_string()
                    />
                </div>
            </div>
        }
    };

    let sales_tab = move || {
        view! {
            {metrics()}
            <div class="dashboard__columns">
                <div class="dashboard__column">
                    <GeoScatter
                        title="Vendas por estado".to_string()
                        points=from_data(data, |d| geo_points(&d.sales_by_location))
                    />
                    <LineChart
                        title="Quantidade de vendas mensal".to_string()
                        categories=month_categories()
                        series=from_data(data, |d| monthly_series(&d.sales_by_month))
                        value_title="Quantidade de vendas".to_string()
                    />
                </div>
                <div class="dashboard__column">
                    <BarChart
                        title="Top 5 estados".to_string()
                        bars=from_data(data, |d| location_bars(&d.top_states_by_sales))
                        value_title="Quantidade de vendas".to_string()
                    />
                    <BarChart
                        title="Vendas por categoria".to_string()
                        bars=from_data(data, |d| category_bars(&d.sales_by_category))
                        value_title="Quantidade de vendas".to_string()
                    />
                </div>
            </div>
        }
    };

    let sellers_tab = move || {
        let revenue_bars = Signal::derive(move || {
            let n = top_n.get();
            data.with(|d| {
                d.as_ref()
                    .map(|d| seller_bars(&d.sellers, n, SellerMeasure::Revenue))
                    .unwrap_or_default()
            })
        });
        let sales_bars = Signal::derive(move || {
            let n = top_n.get();
            data.with(|d| {
                d.as_ref()
                    .map(|d| seller_bars(&d.sellers, n, SellerMeasure::Sales))
                    .unwrap_or_default()
            })
        });

        view! {
            <NumberInput
                label="Qtde de Vendedores"
                min=TOP_SELLERS_MIN
                max=TOP_SELLERS_MAX
                value=top_n
                on_change=Callback::new(move |n: usize| set_top_n.set(clamp_top_n(n)))
            />
            {metrics()}
            <div class="dashboard__columns">
                <div class="dashboard__column">
                    <BarChart
                        title=Signal::derive(move || format!("Top {} vendedores (receita)", top_n.get()))
                        bars=revenue_bars
                        horizontal=true
                    />
                </div>
                <div class="dashboard__column">
                    <BarChart
                        title=Signal::derive(move || format!("Top {} vendedores (qtd. vendas)", top_n.get()))
                        bars=sales_bars
                        horizontal=true
                    />
                </div>
            </div>
        }
    };

    view! {
        <div id="d402_sales_dashboard--dashboard" class="dashboard">
            <aside class="dashboard__sidebar">
                <h2 class="dashboard__sidebar-title">"Filtros"</h2>
                {move || {
                    let options = region_options
                        .get()
                        .into_iter()
                        .map(|o| (o.code, o.label))
                        .collect::<Vec<_>>();
                    view! {
                        <Select
                            label="Região"
                            id="d402-region".to_string()
                            value=Signal::derive(move || region.get().code().to_string())
                            options=options
                            on_change=Callback::new(move |code: String| {
                                set_region.set(Region::from_code(&code).unwrap_or_default())
                            })
                        />
                    }
                }}
                <Switch checked=all_periods label="Dados de todos os períodos"/>
                <RangeSlider
                    label="Ano"
                    min=YEAR_MIN
                    max=YEAR_MAX
                    value=year
                    disabled=all_periods
                    on_change=Callback::new(move |y: i32| set_year.set(y))
                />
                <MultiSelect
                    label="Vendedores"
                    options=seller_options
                    selected=selected_sellers
                    placeholder="Todos os vendedores".to_string()
                />
            </aside>

            <main class="dashboard__content">
                <h1 class="dashboard__title">"DASHBOARD DE VENDAS 🛒"</h1>

                <Show when=move || loading.get()>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center class="dashboard__loading">
                        <Spinner />
                        <span>"Carregando dados..."</span>
                    </Flex>
                </Show>

                <TabList selected_value=selected_tab>
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| view! { <Tab value=tab.value()>{tab.label()}</Tab> })
                        .collect_view()}
                </TabList>

                <div class="dashboard__tab-content">
                    {move || {
                        if let Some(err) = error.get() {
                            return view! {
                                <MessageBar intent=MessageBarIntent::Error>
                                    <strong>"Erro ao carregar dados: "</strong>
                                    {err}
                                </MessageBar>
                            }
                                .into_any();
                        }
                        match DashboardTab::from_value(&selected_tab.get()) {
                            DashboardTab::Revenue => revenue_tab().into_any(),
                            DashboardTab::Sales => sales_tab().into_any(),
                            DashboardTab::Sellers => sellers_tab().into_any(),
                        }
                    }}
                </div>
            </main>
        </div>
    }
}
