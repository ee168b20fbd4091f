mod tests_compound;
mod tests_index;
