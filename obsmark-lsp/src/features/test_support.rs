pub(crate) const SAMPLE: &str = "\
# Sensor dashboard

Interactive controls below.
```js
viewof gain = Inputs.range([0, 11], {label: \"Gain\"})
```

Current gain: ${gain}
";

pub(crate) const PLAIN: &str = "# Hello\n\nJust text.\n";

pub(crate) fn sample_source() -> &'static str {
    SAMPLE
}

pub(crate) fn plain_source() -> &'static str {
    PLAIN
}
