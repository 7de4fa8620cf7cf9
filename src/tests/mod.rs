mod integration_end_to_end;
mod unit_markdown_render;
mod unit_slug;
