use super::cell_format::format_cell;
use crate::shared::components::ui::StatusBadge;
use contracts::shared::module_config::{ColumnDef, ColumnFormat};
use contracts::shared::record::{field_text, Record};
use leptos::prelude::*;
use thaw::*;

const DEFAULT_COLUMN_WIDTH: f64 = 100.0;

/// Read-only table of records laid out by the module's column definitions
#[component]
pub fn DataTable(
    columns: Vec<ColumnDef>,
    #[prop(into)] rows: Signal<Vec<Record>>,
    /// Message for an empty dataset
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
) -> impl IntoView {
    let column_count = columns.len();
    let header_columns = columns.clone();
    let columns = StoredValue::new(columns);

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    {header_columns.into_iter().map(|column| {
                        let min_width = column.width.map(f64::from).unwrap_or(DEFAULT_COLUMN_WIDTH);
                        view! {
                            <TableHeaderCell min_width=min_width>{column.label}</TableHeaderCell>
                        }
                    }).collect_view()}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        let text = empty_text.get().unwrap_or_else(|| "No records".to_string());
                        return view! {
                            <tr class="data-table__empty">
                                <td colspan=column_count.to_string()>{text}</td>
                            </tr>
                        }.into_any();
                    }

                    rows.into_iter()
                        .map(|record| {
                            let cells = columns.with_value(|columns| {
                                columns.iter().map(|column| render_cell(&record, column)).collect_view()
                            });
                            view! { <TableRow>{cells}</TableRow> }
                        })
                        .collect_view()
                        .into_any()
                }}
            </TableBody>
        </Table>
    }
}

fn render_cell(record: &Record, column: &ColumnDef) -> AnyView {
    match column.format {
        ColumnFormat::Status => {
            let status = field_text(record, &column.key).unwrap_or_default();
            view! {
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        ColumnFormat::Integer | ColumnFormat::Money => {
            let text = format_cell(record, column);
            view! {
                <TableCell class="text-right">
                    <TableCellLayout>{text}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        ColumnFormat::Text | ColumnFormat::Date => {
            let text = format_cell(record, column);
            view! {
                <TableCell>
                    <TableCellLayout>{text}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
    }
}
