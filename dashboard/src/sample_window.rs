use std::collections::VecDeque;

/// Bounded FIFO of the most recent samples driving the live chart.
///
/// The three sequences always have equal length, at most `capacity`; once
/// full, inserting evicts the oldest sample. A capacity of 0 keeps the
/// window permanently empty (chart disabled).
#[derive(Debug)]
pub struct SampleWindow {
    capacity: usize,
    timestamps: VecDeque<String>,
    values: VecDeque<f64>,
    setpoints: VecDeque<f64>,
}

impl SampleWindow {
    pub fn new(capacity: usize) -> Self {
        SampleWindow {
            capacity,
            timestamps: VecDeque::with_capacity(capacity),
            values: VecDeque::with_capacity(capacity),
            setpoints: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, timestamp: String, value: f64, setpoint: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.timestamps.len() == self.capacity {
            self.timestamps.pop_front();
            self.values.pop_front();
            self.setpoints.pop_front();
        }
        self.timestamps.push_back(timestamp);
        self.values.push_back(value);
        self.setpoints.push_back(setpoint);
    }

    /// snapshot handed to the chart surface, which redraws from a copy
    pub fn series(&self) -> (Vec<String>, Vec<f64>, Vec<f64>) {
        (
            self.timestamps.iter().cloned().collect(),
            self.values.iter().copied().collect(),
            self.setpoints.iter().copied().collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(window: &SampleWindow) -> (usize, usize, usize) {
        let (timestamps, values, setpoints) = window.series();
        (timestamps.len(), values.len(), setpoints.len())
    }

    #[test]
    fn should_keep_sequences_in_lockstep() {
        let mut window = SampleWindow::new(5);
        for i in 0..8 {
            window.push(format!("13:37:0{i}"), i as f64, 100.0);
            let (t, v, s) = lengths(&window);
            assert_eq!(t, v);
            assert_eq!(v, s);
            assert!(t <= window.capacity());
        }
    }

    #[test]
    fn should_evict_oldest_when_full() {
        let mut window = SampleWindow::new(3);
        window.push("t1".to_string(), 10.0, 100.0);
        window.push("t2".to_string(), 20.0, 100.0);
        window.push("t3".to_string(), 30.0, 100.0);
        window.push("t4".to_string(), 40.0, 100.0);

        let (timestamps, values, setpoints) = window.series();
        assert_eq!(vec!["t2", "t3", "t4"], timestamps);
        assert_eq!(vec![20.0, 30.0, 40.0], values);
        assert_eq!(vec![100.0; 3], setpoints);
    }

    #[test]
    fn should_preserve_insertion_order_below_capacity() {
        let mut window = SampleWindow::new(10);
        window.push("t1".to_string(), 1.0, 50.0);
        window.push("t2".to_string(), 2.0, 50.0);

        let (timestamps, values, _) = window.series();
        assert_eq!(vec!["t1", "t2"], timestamps);
        assert_eq!(vec![1.0, 2.0], values);
    }

    #[test]
    fn should_stay_empty_with_zero_capacity() {
        let mut window = SampleWindow::new(0);
        window.push("t1".to_string(), 1.0, 50.0);
        window.push("t2".to_string(), 2.0, 50.0);

        assert!(window.is_empty());
        assert_eq!(0, window.len());
    }
}
