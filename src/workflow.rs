use std::collections::BTreeSet;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use serde_json::{Value, json};
use tracing::warn;
use trimshop::contact::{ContactChannel, ContactForm, WebhookClient, whatsapp_link};
use trimshop::loader::CatalogLoader;
use trimshop::store::ClientStore;
use trimshop::view::{BrandLogos, Card, ResultsPanel};
use trimshop_catalog::{
	CatalogController, CatalogEvent, PageItem, QuickResults, QuickSearch, VehicleRecord,
	page_count, page_slice, page_window,
};

use crate::cli::{
	BrowseArgs, Command, ContactArgs, FacetsArgs, FavoritesArgs, SearchArgs, ThemeArgs,
};
use crate::settings::ResolvedConfig;

const EMPTY_MESSAGE: &str = "No vehicles match your filters";
const SENT_MESSAGE: &str = "Thank you for your message. We will contact you very soon!";
const SEND_FAILED_MESSAGE: &str =
	"There was an error sending your message. Please try again or call us directly.";

/// Output of one command, ready for either output format.
pub(crate) struct Report {
	lines: Vec<String>,
	json: Value,
}

impl Report {
	fn new(lines: Vec<String>, json: Value) -> Self {
		Self { lines, json }
	}

	pub(crate) fn lines(&self) -> &[String] {
		&self.lines
	}

	pub(crate) fn json(&self) -> &Value {
		&self.json
	}
}

/// Runs CLI commands against the configured catalog and client state.
pub(crate) struct CatalogWorkflow {
	config: ResolvedConfig,
	store: ClientStore,
	today: NaiveDate,
}

impl CatalogWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let store = ClientStore::new(config.state_file.clone());
		Self {
			config,
			store,
			today: Local::now().date_naive(),
		}
	}

	pub(crate) fn run(&self, command: &Command) -> Result<Report> {
		match command {
			Command::Browse(args) => self.browse(args),
			Command::Facets(args) => self.facets(args),
			Command::Search(args) => self.search(args),
			Command::Contact(args) => self.contact(args),
			Command::Theme(args) => self.theme(args),
			Command::Favorites(args) => self.favorites(args),
		}
	}

	fn loader(&self) -> CatalogLoader {
		let catalog = &self.config.catalog;
		CatalogLoader::new()
			.with_embedded(catalog.embedded.clone())
			.with_table(Some(catalog.table.clone()), catalog.dialect)
			.with_shuffle(catalog.shuffle)
	}

	/// Load the catalog into a controller, failing with the load error message.
	fn controller(&self) -> Result<CatalogController<ResultsPanel>> {
		let mut controller =
			CatalogController::new(ResultsPanel::new(), self.config.catalog.batch_size);
		controller.begin_loading();
		controller.finish_loading(self.loader().load());
		if let Some(message) = controller.view().failure() {
			bail!("unable to load vehicles: {message}");
		}
		Ok(controller)
	}

	fn browse(&self, args: &BrowseArgs) -> Result<Report> {
		let mut controller = self.controller()?;

		if let Some(brand) = &args.brand {
			if !controller.facets().has_brand(brand) {
				bail!("unknown brand `{brand}`; run `trimshop facets` to list brands");
			}
			controller.dispatch(CatalogEvent::ToggleBrand(brand.clone()));
		}
		if let Some(model) = &args.model {
			let brand = args.brand.as_deref().unwrap_or_default();
			if !controller.facets().models_for(brand).contains(model) {
				bail!("unknown model `{model}` for the selected brand");
			}
			controller.dispatch(CatalogEvent::ToggleModel(model.clone()));
		}
		for year in args.year.iter().collect::<BTreeSet<_>>() {
			controller.dispatch(CatalogEvent::ToggleYear(year.clone()));
		}
		if let Some(query) = &args.query {
			controller.dispatch(CatalogEvent::SetQuery(query.clone()));
		}

		if let Some(page) = args.page {
			return Ok(self.browse_page(&controller, page));
		}

		for _ in 0..args.scroll {
			controller.dispatch(CatalogEvent::ScrollNearBottom);
		}
		if args.all {
			while controller.has_more() {
				controller.dispatch(CatalogEvent::ScrollNearBottom);
			}
		}

		let favorites = self.store.load().favorites;
		let panel = controller.view();
		let cards = self.cards(panel.cards(), &favorites);

		let mut lines = Vec::new();
		if panel.is_empty_state() {
			lines.push(EMPTY_MESSAGE.to_string());
			lines.push("Clear the filters to see every vehicle.".to_string());
		} else {
			lines.push(format!(
				"Showing {} of {} vehicles",
				cards.len(),
				panel.result_count()
			));
			lines.extend(cards.iter().map(Card::line));
			if panel.more_available() {
				lines.push("More vehicles available (use --scroll or --all)".to_string());
			}
		}

		let json = json!({
			"count": panel.result_count(),
			"shown": cards.len(),
			"more": panel.more_available(),
			"empty": panel.is_empty_state(),
			"modelChoices": panel.model_choices(),
			"cards": cards,
		});
		Ok(Report::new(lines, json))
	}

	/// Numbered pagination over the filtered results.
	fn browse_page(&self, controller: &CatalogController<ResultsPanel>, page: usize) -> Report {
		let per_page = self.config.catalog.batch_size;
		let filtered = controller.filtered();
		let total_pages = page_count(filtered.len(), per_page);
		let current = page.clamp(1, total_pages.max(1));
		let favorites = self.store.load().favorites;
		let cards = self.cards(page_slice(filtered, current, per_page), &favorites);
		let window = page_window(current, total_pages);

		let mut lines = Vec::new();
		if filtered.is_empty() {
			lines.push(EMPTY_MESSAGE.to_string());
		} else {
			lines.push(format!(
				"Page {current} of {total_pages} ({} vehicles)",
				filtered.len()
			));
			lines.extend(cards.iter().map(Card::line));
		}
		if !window.is_empty() {
			lines.push(render_page_bar(&window, current));
		}

		let json = json!({
			"count": filtered.len(),
			"page": current,
			"pages": total_pages,
			"window": window,
			"cards": cards,
		});
		Report::new(lines, json)
	}

	fn cards<'a>(
		&'a self,
		records: &'a [VehicleRecord],
		favorites: &BTreeSet<String>,
	) -> Vec<Card<'a>> {
		records
			.iter()
			.map(|record| Card::new(record, self.logos(), favorites, self.today))
			.collect()
	}

	fn logos(&self) -> &BrandLogos {
		&self.config.logos
	}

	fn facets(&self, args: &FacetsArgs) -> Result<Report> {
		let controller = self.controller()?;
		let index = controller.facets();

		let mut lines = vec!["Brands:".to_string()];
		lines.extend(
			index
				.brands()
				.iter()
				.map(|row| format!("  {} ({})", row.name, row.count)),
		);
		lines.push(format!("Years: {}", index.years().join(", ")));

		let models = match &args.brand {
			Some(brand) => {
				if !index.has_brand(brand) {
					bail!("unknown brand `{brand}`; run `trimshop facets` to list brands");
				}
				let models: Vec<&String> = index.models_for(brand).iter().collect();
				lines.push(format!(
					"Models of {brand}: {}",
					models
						.iter()
						.map(|model| model.as_str())
						.collect::<Vec<_>>()
						.join(", ")
				));
				json!(models)
			}
			None => {
				lines.push("Select a brand (--brand) to list its models".to_string());
				Value::Null
			}
		};

		let json = json!({
			"brands": index.brands(),
			"years": index.years(),
			"models": models,
		});
		Ok(Report::new(lines, json))
	}

	fn search(&self, args: &SearchArgs) -> Result<Report> {
		let query = args.query.as_deref().unwrap_or_default().trim();
		let mut state = self.store.load();
		if !query.is_empty() && !args.no_history {
			state = self.store.update(|state| {
				state.remember_search(query);
				state.clone()
			})?;
		}

		let catalog = if query.is_empty() {
			Vec::new()
		} else {
			self.loader().load().unwrap_or_else(|err| {
				warn!(error = %err, "quick search continues without vehicles");
				Vec::new()
			})
		};

		let results = QuickSearch::default().run(query, &catalog, &state.search_history);
		let mut lines = Vec::new();
		match &results {
			QuickResults::History { entries } if entries.is_empty() => {
				lines.push("No recent searches".to_string());
			}
			QuickResults::History { entries } => {
				lines.push("Recent Searches".to_string());
				lines.extend(entries.iter().map(|entry| format!("  {entry}")));
			}
			QuickResults::Matches { .. } if results.is_empty() => {
				lines.push(format!("Nothing found for \"{query}\""));
			}
			QuickResults::Matches {
				vehicles,
				shortcuts,
			} => {
				if !vehicles.is_empty() {
					lines.push("VEHICLES".to_string());
					lines.extend(vehicles.iter().map(|record| format!("  {}", record.title())));
				}
				if !shortcuts.is_empty() {
					lines.push("SERVICES & PAGES".to_string());
					lines.extend(
						shortcuts
							.iter()
							.map(|shortcut| format!("  {} -> {}", shortcut.name, shortcut.url)),
					);
				}
			}
		}

		Ok(Report::new(lines, serde_json::to_value(&results)?))
	}

	fn contact(&self, args: &ContactArgs) -> Result<Report> {
		let form = ContactForm {
			name: args.name.clone(),
			email: args.email.clone(),
			phone: args.phone.clone(),
			vehicle: args.vehicle.clone(),
			message: args.message.clone(),
			attachment: args.attachment.clone(),
		};
		form.validate()?;

		let settings = &self.config.contact;
		match args.channel.unwrap_or(settings.channel) {
			ContactChannel::Webhook => {
				let url = settings.webhook_url.as_deref().ok_or_else(|| {
					anyhow!("no webhook configured; set contact.webhook_url or use --channel whatsapp")
				})?;
				WebhookClient::new(url, settings.source.as_str())?
					.submit(&form)
					.context(SEND_FAILED_MESSAGE)?;
				let json = json!({ "channel": "webhook", "delivered": true });
				Ok(Report::new(vec![SENT_MESSAGE.to_string()], json))
			}
			ContactChannel::Whatsapp => {
				let number = settings.whatsapp_number.as_deref().ok_or_else(|| {
					anyhow!("no WhatsApp number configured; set contact.whatsapp_number")
				})?;
				let link = whatsapp_link(number, &form)?;
				let lines = vec![
					"Open this link to send your message on WhatsApp:".to_string(),
					link.to_string(),
				];
				let json = json!({ "channel": "whatsapp", "link": link.as_str() });
				Ok(Report::new(lines, json))
			}
		}
	}

	fn theme(&self, args: &ThemeArgs) -> Result<Report> {
		let theme = if args.toggle || args.set.is_some() {
			self.store.update(|state| {
				let next = args.set.unwrap_or(state.theme.toggled());
				state.theme = next;
				next
			})?
		} else {
			self.store.load().theme
		};

		Ok(Report::new(
			vec![format!("Theme: {}", theme.as_str())],
			json!({ "theme": theme }),
		))
	}

	fn favorites(&self, args: &FavoritesArgs) -> Result<Report> {
		let mut lines = Vec::new();
		let state = if args.toggle.is_empty() {
			self.store.load()
		} else {
			self.store.update(|state| {
				for id in &args.toggle {
					let added = state.toggle_favorite(id);
					lines.push(format!(
						"{} {id}",
						if added { "Added" } else { "Removed" }
					));
				}
				state.clone()
			})?
		};

		if state.favorites.is_empty() {
			lines.push("No favorites yet".to_string());
		} else {
			lines.push(format!("Favorites ({}):", state.favorites.len()));
			lines.extend(state.favorites.iter().map(|id| format!("  {id}")));
		}
		Ok(Report::new(lines, json!({ "favorites": state.favorites })))
	}
}

/// Render the numbered page bar, bracketing the current page.
fn render_page_bar(window: &[PageItem], current: usize) -> String {
	window
		.iter()
		.map(|item| match item {
			PageItem::Page(page) if *page == current => format!("[{page}]"),
			PageItem::Page(page) => page.to_string(),
			PageItem::Gap => "…".to_string(),
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;

	use clap::Parser;
	use tempfile::{TempDir, tempdir};
	use trimshop_catalog::ShuffleOrder;

	use super::*;
	use crate::cli::CliArgs;
	use crate::settings::{CatalogSettings, ContactSettings};

	const TABLE: &str = "Brand,Model,Year\nToyota,Corolla,2020\nToyota,Yaris,2021\nHonda,Civic,2019\nHonda,Jazz,2020\nBMW,X5,2022\n";

	fn workflow(dir: &Path, batch_size: usize) -> CatalogWorkflow {
		let table = dir.join("vehicles.csv");
		fs::write(&table, TABLE).unwrap();
		CatalogWorkflow::from_config(ResolvedConfig {
			catalog: CatalogSettings {
				embedded: None,
				table: table.display().to_string(),
				dialect: Default::default(),
				batch_size,
				shuffle: ShuffleOrder::Preserve,
			},
			contact: ContactSettings {
				channel: ContactChannel::Whatsapp,
				webhook_url: None,
				whatsapp_number: Some("212700000000".into()),
				source: "test".into(),
			},
			logos: BrandLogos::default(),
			state_file: dir.join("state.json"),
		})
	}

	fn run(dir: &TempDir, batch_size: usize, args: &[&str]) -> Result<Report> {
		let mut argv = vec!["trimshop"];
		argv.extend_from_slice(args);
		let cli = CliArgs::parse_from(argv);
		workflow(dir.path(), batch_size).run(&cli.command)
	}

	#[test]
	fn browse_renders_first_batch_and_reports_more() {
		let dir = tempdir().unwrap();
		let report = run(&dir, 2, &["browse"]).unwrap();
		assert_eq!(report.json()["shown"], 2);
		assert_eq!(report.json()["count"], 5);
		assert_eq!(report.json()["more"], true);

		let report = run(&dir, 2, &["browse", "--all"]).unwrap();
		assert_eq!(report.json()["shown"], 5);
		assert_eq!(report.json()["more"], false);
	}

	#[test]
	fn browse_filters_by_brand_and_year() {
		let dir = tempdir().unwrap();
		let report = run(&dir, 12, &["browse", "--brand", "Honda", "--year", "2020"]).unwrap();
		assert_eq!(report.json()["count"], 1);
		assert_eq!(report.json()["cards"][0]["model"], "Jazz");
		assert_eq!(report.json()["modelChoices"], json!(["Civic", "Jazz"]));
	}

	#[test]
	fn browse_without_matches_shows_empty_state() {
		let dir = tempdir().unwrap();
		let report = run(&dir, 12, &["browse", "--query", "lada"]).unwrap();
		assert_eq!(report.json()["empty"], true);
		assert_eq!(report.lines()[0], EMPTY_MESSAGE);
	}

	#[test]
	fn browse_rejects_unknown_brand() {
		let dir = tempdir().unwrap();
		assert!(run(&dir, 12, &["browse", "--brand", "Lada"]).is_err());
	}

	#[test]
	fn numbered_pages_slice_results() {
		let dir = tempdir().unwrap();
		let report = run(&dir, 2, &["browse", "--page", "3"]).unwrap();
		assert_eq!(report.json()["pages"], 3);
		assert_eq!(report.json()["cards"][0]["brand"], "BMW");
		assert_eq!(report.lines().last().unwrap(), "1 2 [3]");
	}

	#[test]
	fn load_failure_is_an_error() {
		let dir = tempdir().unwrap();
		let mut workflow = workflow(dir.path(), 12);
		workflow.config.catalog.table = dir.path().join("missing.csv").display().to_string();
		let cli = CliArgs::parse_from(["trimshop", "facets"]);
		let err = workflow.run(&cli.command).err().unwrap();
		assert!(err.to_string().starts_with("unable to load vehicles"));
	}

	#[test]
	fn facets_list_brands_and_models() {
		let dir = tempdir().unwrap();
		let report = run(&dir, 12, &["facets", "--brand", "Toyota"]).unwrap();
		assert_eq!(report.json()["models"], json!(["Corolla", "Yaris"]));
		assert_eq!(report.json()["years"][0], "2022");
	}

	#[test]
	fn search_records_history_and_lists_it_for_blank_queries() {
		let dir = tempdir().unwrap();
		let report = run(&dir, 12, &["search", "civic"]).unwrap();
		assert_eq!(report.json()["kind"], "matches");
		assert_eq!(report.json()["vehicles"][0]["model"], "Civic");

		let report = run(&dir, 12, &["search"]).unwrap();
		assert_eq!(report.json()["entries"], json!(["civic"]));
	}

	#[test]
	fn contact_builds_whatsapp_link() {
		let dir = tempdir().unwrap();
		let report = run(
			&dir,
			12,
			&[
				"contact",
				"--name",
				"Sara",
				"--email",
				"sara@example.com",
				"--message",
				"Seat repair",
			],
		)
		.unwrap();
		let link = report.json()["link"].as_str().unwrap();
		assert!(link.starts_with("https://wa.me/212700000000?text="));
	}

	#[test]
	fn contact_validation_happens_first() {
		let dir = tempdir().unwrap();
		let result = run(
			&dir,
			12,
			&[
				"contact",
				"--name",
				"Sara",
				"--email",
				"sara",
				"--message",
				"Seat repair",
				"--channel",
				"webhook",
			],
		);
		let err = result.err().unwrap();
		assert!(err.to_string().contains("valid email"));
	}

	#[test]
	fn theme_and_favorites_persist() {
		let dir = tempdir().unwrap();
		let report = run(&dir, 12, &["theme", "--toggle"]).unwrap();
		assert_eq!(report.json()["theme"], "dark");
		let report = run(&dir, 12, &["theme"]).unwrap();
		assert_eq!(report.json()["theme"], "dark");

		run(&dir, 12, &["favorites", "--toggle", "csv-0"]).unwrap();
		let report = run(&dir, 12, &["favorites"]).unwrap();
		assert_eq!(report.json()["favorites"], json!(["csv-0"]));
	}

	#[test]
	fn page_bar_marks_current_page() {
		let bar = render_page_bar(&page_window(6, 12), 6);
		assert_eq!(bar, "1 … 4 5 [6] 7 8 … 12");
	}
}
