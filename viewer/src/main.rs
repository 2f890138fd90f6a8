use hazcore::records::hazard::HazardRecord;
use hazcore::session::SubmissionHandler;
use hazcore::view::selection::Selection;
use hazcore::view::series::{render_selection, ScatterSeries};
use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, pick_list, row, scrollable, text, text_editor, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Size, Task, Theme,
};

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Viewer::boot, Viewer::update, Viewer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Viewer) -> String {
    "Hazard Centroid Viewer".into()
}

fn application_theme(_: &Viewer) -> Theme {
    Theme::Dark
}

struct Viewer {
    form: InputForm,
    handler: SubmissionHandler,
    results: Option<Results>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    FieldChanged(Field, String),
    IntensityEdited(text_editor::Action),
    RunPressed,
    SelectionChosen(Selection),
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Latitudes,
    Longitudes,
}

impl Viewer {
    fn boot() -> (Self, Task<Message>) {
        (
            Viewer {
                form: InputForm::default(),
                handler: SubmissionHandler::new(),
                results: None,
                status: "Enter centroids and intensities, then run.".into(),
                history: Vec::new(),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                state.form.update_field(field, value);
                Task::none()
            }
            Message::IntensityEdited(action) => {
                state.form.intensity.perform(action);
                Task::none()
            }
            Message::RunPressed => {
                let intensity_text = state.form.intensity.text();
                match state
                    .handler
                    .submit(&state.form.lat, &state.form.lon, &intensity_text)
                {
                    Ok(record) => {
                        state.status = "Centroids and hazard created successfully!".into();
                        state.push_history(format!(
                            "Loaded {} events over {} centroids",
                            record.event_count(),
                            record.centroid_count()
                        ));
                        state.results = Some(Results::fresh(record));
                    }
                    Err(err) => {
                        state.status = format!("Error parsing inputs: {err}");
                        state.push_history(format!("Rejected: {err}"));
                        state.results = None;
                    }
                }
                Task::none()
            }
            Message::SelectionChosen(selection) => {
                if let Some(results) = &mut state.results {
                    results.select(selection);
                }
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let form_column = column![
            text("Hazard Inputs").size(26),
            text("Latitudes (comma-separated)").size(14),
            text_input("50,55,70", &state.form.lat)
                .on_input(|value| Message::FieldChanged(Field::Latitudes, value))
                .padding(6),
            text("Longitudes (comma-separated)").size(14),
            text_input("10,20,30", &state.form.lon)
                .on_input(|value| Message::FieldChanged(Field::Longitudes, value))
                .padding(6),
            text("Intensity matrix (rows = events, columns = centroids)").size(14),
            text_editor(&state.form.intensity)
                .on_action(Message::IntensityEdited)
                .height(Length::Fixed(120.0))
                .padding(6),
            button("Run").on_press(Message::RunPressed).padding(10),
            text(&state.status).size(14),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(110.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(360.0));

        let results_column = match &state.results {
            Some(results) => results.view(),
            None => column![
                text("Results").size(26),
                text("Run a submission to see the tables and the plot.").size(14),
            ]
            .spacing(10)
            .padding(16)
            .width(Length::Fill),
        };

        let layout = row![form_column, results_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

struct InputForm {
    lat: String,
    lon: String,
    intensity: text_editor::Content,
}

impl InputForm {
    fn default() -> Self {
        Self {
            lat: "50,55,70".into(),
            lon: "10,20,30".into(),
            intensity: text_editor::Content::with_text("1,2,3\n2,1,0\n0,2,1"),
        }
    }

    fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Latitudes => self.lat = value,
            Field::Longitudes => self.lon = value,
        }
    }
}

/// Everything derived from one successful submission. Rebuilt whole on the
/// next run; selection changes only re-derive the plot.
struct Results {
    record: HazardRecord,
    selection: Selection,
    series: Option<ScatterSeries>,
    plot_error: Option<String>,
}

impl Results {
    fn fresh(record: HazardRecord) -> Self {
        let mut results = Self {
            record,
            selection: Selection::Event(0),
            series: None,
            plot_error: None,
        };
        results.derive();
        results
    }

    fn select(&mut self, selection: Selection) {
        self.selection = selection;
        self.derive();
    }

    fn derive(&mut self) {
        match render_selection(&self.record, self.selection) {
            Ok(series) => {
                self.series = Some(series);
                self.plot_error = None;
            }
            Err(err) => {
                self.series = None;
                self.plot_error = Some(format!("Something went wrong while plotting: {err}"));
            }
        }
    }

    fn view(&self) -> Column<'_, Message> {
        let lat_table = self
            .record
            .centroids
            .lat
            .iter()
            .enumerate()
            .fold(Column::new().spacing(2), |col, (index, value)| {
                col.push(text(format!("[{index}] {value}")).size(12))
            });

        let lon_table = self
            .record
            .centroids
            .lon
            .iter()
            .enumerate()
            .fold(Column::new().spacing(2), |col, (index, value)| {
                col.push(text(format!("[{index}] {value}")).size(12))
            });

        let matrix_table = self
            .record
            .intensity
            .outer_iter()
            .enumerate()
            .fold(Column::new().spacing(2), |col, (index, event_row)| {
                let cells = event_row
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                col.push(text(format!("Event {index}: {cells}")).size(12))
            });

        let selector = pick_list(
            Selection::options(self.record.event_count()),
            Some(self.selection),
            Message::SelectionChosen,
        )
        .padding(6);

        let plot: Element<'_, Message> = if let Some(series) = &self.series {
            let scatter = Canvas::new(ScatterPlot::new(series))
                .width(Length::Fill)
                .height(Length::Fixed(320.0));
            let bar = Canvas::new(ColorBar::new(series))
                .width(Length::Fixed(76.0))
                .height(Length::Fixed(320.0));
            row![scatter, bar].spacing(8).into()
        } else if let Some(message) = &self.plot_error {
            text(message.clone()).size(14).into()
        } else {
            text("No plot available").size(14).into()
        };

        column![
            text("Results").size(26),
            text("Latitude array").size(16),
            Container::new(lat_table).padding(6),
            text("Longitude array").size(16),
            Container::new(lon_table).padding(6),
            text("Hazard intensity matrix").size(16),
            Container::new(scrollable(matrix_table).height(Length::Fixed(90.0))).padding(6),
            text("Select event to visualize").size(16),
            selector,
            plot,
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill)
    }
}

const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 34.0;
const MARGIN_BOTTOM: f32 = 40.0;
const MARKER_RADIUS: f32 = 7.0;

/// Scatter plot of centroids colored by the selected intensity series.
#[derive(Clone)]
struct ScatterPlot {
    series: ScatterSeries,
}

impl ScatterPlot {
    fn new(series: &ScatterSeries) -> Self {
        Self {
            series: series.clone(),
        }
    }
}

impl canvas::Program<Message> for ScatterPlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let plot_width = (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let origin = Point::new(MARGIN_LEFT, MARGIN_TOP);

        let border = Path::new(|builder| {
            builder.rectangle(origin, Size::new(plot_width, plot_height));
        });
        frame.stroke(
            &border,
            Stroke::default()
                .with_color(Color::from_rgb(0.35, 0.35, 0.45))
                .with_width(1.0),
        );

        let (lon_min, lon_max) = padded_range(&self.series.lon);
        let (lat_min, lat_max) = padded_range(&self.series.lat);
        let (value_min, value_max) = self.series.value_range();

        for index in 0..self.series.lon.len() {
            let x = origin.x
                + (((self.series.lon[index] - lon_min) / (lon_max - lon_min)) as f32) * plot_width;
            let y = origin.y + plot_height
                - (((self.series.lat[index] - lat_min) / (lat_max - lat_min)) as f32) * plot_height;
            let [r, g, b] = self
                .series
                .palette
                .map(self.series.values[index], value_min, value_max);
            let marker = Path::new(|builder| builder.circle(Point::new(x, y), MARKER_RADIUS));
            frame.fill(&marker, Color::from_rgb8(r, g, b));
        }

        frame.fill_text(canvas::Text {
            content: self.series.title.clone(),
            position: Point::new(MARGIN_LEFT, 8.0),
            color: Color::WHITE,
            size: 16.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: self.series.y_label.to_string(),
            position: Point::new(4.0, MARGIN_TOP - 20.0),
            color: Color::from_rgb(0.8, 0.8, 0.8),
            size: 12.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: self.series.x_label.to_string(),
            position: Point::new(
                origin.x + plot_width / 2.0 - 28.0,
                bounds.height - MARGIN_BOTTOM + 18.0,
            ),
            color: Color::from_rgb(0.8, 0.8, 0.8),
            size: 12.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: format!("{lon_min:.1}"),
            position: Point::new(origin.x, bounds.height - MARGIN_BOTTOM + 4.0),
            color: Color::from_rgb(0.6, 0.6, 0.6),
            size: 11.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: format!("{lon_max:.1}"),
            position: Point::new(
                origin.x + plot_width - 30.0,
                bounds.height - MARGIN_BOTTOM + 4.0,
            ),
            color: Color::from_rgb(0.6, 0.6, 0.6),
            size: 11.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: format!("{lat_max:.1}"),
            position: Point::new(6.0, origin.y),
            color: Color::from_rgb(0.6, 0.6, 0.6),
            size: 11.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: format!("{lat_min:.1}"),
            position: Point::new(6.0, origin.y + plot_height - 12.0),
            color: Color::from_rgb(0.6, 0.6, 0.6),
            size: 11.0.into(),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Vertical color-bar legend for the active palette and value range.
#[derive(Clone)]
struct ColorBar {
    series: ScatterSeries,
}

impl ColorBar {
    fn new(series: &ScatterSeries) -> Self {
        Self {
            series: series.clone(),
        }
    }
}

impl canvas::Program<Message> for ColorBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let top = 36.0;
        let bottom = 20.0;
        let strip_height = (bounds.height - top - bottom).max(1.0);
        let strip_width = 18.0;
        let steps = 48u32;
        let step_height = strip_height / steps as f32;

        for step in 0..steps {
            // High values at the top of the strip.
            let t = 1.0 - step as f32 / (steps - 1) as f32;
            let [r, g, b] = self.series.palette.sample(t);
            frame.fill_rectangle(
                Point::new(6.0, top + step as f32 * step_height),
                Size::new(strip_width, step_height + 1.0),
                Color::from_rgb8(r, g, b),
            );
        }

        let (value_min, value_max) = self.series.value_range();
        frame.fill_text(canvas::Text {
            content: self.series.value_label.to_string(),
            position: Point::new(4.0, 8.0),
            color: Color::WHITE,
            size: 13.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: format!("{value_max:.2}"),
            position: Point::new(strip_width + 10.0, top - 4.0),
            color: Color::from_rgb(0.8, 0.8, 0.8),
            size: 11.0.into(),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: format!("{value_min:.2}"),
            position: Point::new(strip_width + 10.0, top + strip_height - 10.0),
            color: Color::from_rgb(0.8, 0.8, 0.8),
            size: 11.0.into(),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Axis range with a small margin so edge markers stay inside the frame.
/// A single point or a flat axis widens to a unit band around the value.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if max > min {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else {
        (min - 1.0, max + 1.0)
    }
}
