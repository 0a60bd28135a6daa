//! Static help pages.

use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocTopic {
    #[default]
    GettingStarted,
    DataIntegration,
    Dashboard,
    ActionCenter,
    AiFeatures,
    RoiTracker,
    Visualizations,
}

impl DocTopic {
    pub const ALL: [DocTopic; 7] = [
        DocTopic::GettingStarted,
        DocTopic::DataIntegration,
        DocTopic::Dashboard,
        DocTopic::ActionCenter,
        DocTopic::AiFeatures,
        DocTopic::RoiTracker,
        DocTopic::Visualizations,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DocTopic::GettingStarted => "Getting Started",
            DocTopic::DataIntegration => "Data Integration",
            DocTopic::Dashboard => "Dashboard Overview",
            DocTopic::ActionCenter => "Using the Action Center",
            DocTopic::AiFeatures => "AI Features Explained",
            DocTopic::RoiTracker => "Maximizing Your ROI",
            DocTopic::Visualizations => "Custom Visualizations",
        }
    }
}

fn topic_content(topic: DocTopic) -> AnyView {
    match topic {
        DocTopic::GettingStarted => view! {
            <h2>"Welcome to PharmaIQ!"</h2>
            <p>"This guide will walk you through the essential first steps to get the most out of your pharmacy intelligence dashboard."</p>
            <h3>"Step 1: Your First Data Upload"</h3>
            <p>"The first and most crucial step is to provide PharmaIQ with your pharmacy data. The richer the data, the more powerful the insights."</p>
            <ol>
                <li>"Navigate to the " <strong>"Data Integration"</strong> " page from the sidebar."</li>
                <li>"You can either upload a CSV file or connect directly to your ERP/POS system."</li>
                <li>"For new users, we recommend starting with a CSV upload to quickly see results."</li>
            </ol>
            <h3>"Step 2: Explore Your Dashboard"</h3>
            <p>"Once your data is uploaded, the Dashboard will come to life. It provides a high-level overview of your pharmacy's key metrics, such as low stock items, top sellers, and potential savings."</p>
            <h3>"Step 3: Check the Action Center"</h3>
            <p>"The " <strong>"Action Center"</strong> " is where our AI provides you with a prioritized to-do list. It's the best place to start taking concrete steps to improve your pharmacy's performance."</p>
        }.into_any(),
        DocTopic::DataIntegration => view! {
            <h2>"Integrating Your Data"</h2>
            <p>"PharmaIQ supports two primary methods for data integration: CSV file upload and direct ERP/POS connection."</p>
            <h3>"CSV File Upload"</h3>
            <p>"This is the quickest way to get started. Your CSV file should contain the following columns in order:"</p>
            <ul>
                <li><strong>"name"</strong>": The full name of the medicine (e.g., \"Paracetamol 500mg\")."</li>
                <li><strong>"batch"</strong>": The batch number for the specific stock item."</li>
                <li><strong>"stock"</strong>": The current number of units available."</li>
                <li><strong>"price"</strong>": The retail price per unit."</li>
                <li><strong>"expiry"</strong>": The expiry date in YYYY-MM-DD format."</li>
            </ul>
            <p><strong>"Example CSV Format:"</strong></p>
            <pre class="code-block"><code>
                "name,batch,stock,price,expiry\nParacetamol 500mg,P500-123,50,25,2025-12-31\nAmoxicillin 250mg,A250-456,30,75,2024-08-30"
            </code></pre>
            <h3>"ERP/POS Connection"</h3>
            <p>"For automated, real-time data synchronization, we recommend connecting your ERP or POS system. Navigate to the \"Connect ERP/POS\" section on the " <strong>"Data Integration"</strong> " page, select your provider from the dropdown, and enter the required API credentials."</p>
        }.into_any(),
        DocTopic::Dashboard => view! {
            <h2>"Dashboard Overview"</h2>
            <p>"The dashboard is your mission control, giving you a quick, visual summary of your pharmacy's health."</p>
            <ul>
                <li><strong>"Quick Stats Cards"</strong>": At-a-glance metrics like the number of low stock items, out of stock items, your current top-selling product, and the total value of your inventory."</li>
                <li><strong>"ROI & Savings Snapshot"</strong>": This card shows you the estimated monthly savings PharmaIQ provides by helping you reduce expiry waste and prevent lost sales from stockouts."</li>
                <li><strong>"Quick Actions"</strong>": Jump directly to the most used sections of the app."</li>
                <li><strong>"AI Business Advisor"</strong>": This feed shows you the latest high-level recommendations from our AI to improve your business."</li>
            </ul>
        }.into_any(),
        DocTopic::ActionCenter => view! {
            <h2>"Using the Action Center"</h2>
            <p>"The Action Center turns complex data analysis into a simple, actionable to-do list."</p>
            <h3>"What It Is"</h3>
            <p>"It's a consolidated list of tasks and recommendations generated by our AI. These range from critical reorder alerts to strategic sales opportunities."</p>
            <h3>"How to Use It"</h3>
            <ol>
                <li><strong>"Review Daily"</strong>": Start your day by checking the Action Center for new high-priority items."</li>
                <li><strong>"Filter Your View"</strong>": Use the filters to focus on what matters most. You can filter by status (To Do / Completed) or by priority (High, Medium, Low)."</li>
                <li><strong>"Take Action"</strong>": Each item provides a clear description of the issue and a suggested action. Many items include a direct link to the relevant page in PharmaIQ to help you resolve it quickly."</li>
                <li><strong>"Mark as Done"</strong>": Once you've addressed an item, check it off to move it to your completed list."</li>
            </ol>
        }.into_any(),
        DocTopic::AiFeatures => view! {
            <h2>"AI Features Explained"</h2>
            <p>"PharmaIQ offers three AI-assisted views of your data."</p>
            <ul>
                <li><strong>"AI Business Advisor"</strong>": Recommendations on the dashboard covering inventory, sales and strategy."</li>
                <li><strong>"AI Insights"</strong>": Press \"Generate\" to get a fresh set of observations about trends in your sales and stock."</li>
                <li><strong>"AI Data Chat"</strong>": Ask questions in plain language, such as which medicines are low on stock or what your top seller is."</li>
            </ul>
        }.into_any(),
        DocTopic::RoiTracker => view! {
            <h2>"Maximizing Your ROI"</h2>
            <p>"The ROI Tracker estimates the money PharmaIQ helps you save each month."</p>
            <ul>
                <li><strong>"Expiry Waste Reduction"</strong>": The value of stock expiring within the next 60 days. Selling or returning these items first prevents a write-off."</li>
                <li><strong>"Lost Sales Prevention"</strong>": Half of the recorded revenue of each out-of-stock medicine, an estimate of the sales a stockout costs you."</li>
            </ul>
            <p>"Act on the items in both tables to turn the estimate into real savings."</p>
        }.into_any(),
        DocTopic::Visualizations => view! {
            <h2>"Custom Visualizations"</h2>
            <p>"Build your own charts from your pharmacy data."</p>
            <ol>
                <li>"Pick a chart type: bar, line or pie."</li>
                <li>"Choose the metric to plot: total revenue, units sold or stock level."</li>
                <li>"Group by medicine, or by time for revenue and units sold."</li>
                <li>"Press \"Generate Chart\" to draw it."</li>
            </ol>
            <p>"Stock levels are only available per medicine, so selecting them switches the grouping back to medicine."</p>
        }.into_any(),
    }
}

#[component]
pub fn DocumentationPage() -> impl IntoView {
    let active = RwSignal::new(DocTopic::default());

    view! {
        <PageFrame page_id="sys_documentation--system" category=PAGE_CAT_SYSTEM class="docs">
            <aside class="docs__nav">
                <h1 class="page-header__title">"Documentation"</h1>
                <nav>
                    <ul>
                        {DocTopic::ALL
                            .into_iter()
                            .map(|topic| {
                                view! {
                                    <li>
                                        <a
                                            href="#"
                                            class="docs__link"
                                            class:docs__link--active=move || active.get() == topic
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                active.set(topic);
                                            }
                                        >
                                            {topic.title()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </aside>
            <article class="docs__content card prose">
                {move || topic_content(active.get())}
            </article>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_have_distinct_titles() {
        let mut titles: Vec<_> = DocTopic::ALL.iter().map(DocTopic::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 7);
        assert_eq!(DocTopic::default().title(), "Getting Started");
    }
}
